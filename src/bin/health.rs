//! Runs every health check, GPU included, and exits with the report's code

use hello_gpu::build_info;
use hello_gpu::health::{self, HealthCheckRunner};

fn main() {
    hello_gpu::logging::init_tracing();

    let report = HealthCheckRunner::standard().run();

    health::print_report(&report);
    println!("{}", build_info::detailed_info());
    std::process::exit(report.exit_code());
}
