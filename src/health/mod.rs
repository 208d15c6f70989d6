//! Health check system for validating application initialization and status
//!
//! This module provides a framework for testing system health, useful for:
//! - Validating startup prerequisites before opening a window
//! - CI health checks
//! - Debugging missing fonts, config files or GPU adapters
//!
//! # Example
//!
//! ```no_run
//! use hello_gpu::health::HealthCheckRunner;
//!
//! let report = HealthCheckRunner::standard().without_gpu().run();
//!
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_header, format_report, print_report};
pub use runner::{CheckOutcome, HealthCheckReport, HealthCheckRunner};

/// Runs the standard suite with GPU checks recorded as skipped
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::standard().without_gpu().run()
}
