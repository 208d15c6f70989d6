//! Terminal rendering of a health report

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::HealthCheckReport;
use crate::build_info;

/// First line of every report: suite, profile and build
pub fn format_header(report: &HealthCheckReport) -> String {
    format!(
        "hello-gpu health | profile: {} | build: {}",
        report.profile,
        build_info::version_string()
    )
}

/// Header, one table row per check, then the tally and verdict
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Result"]);
    for outcome in &report.results {
        let result = &outcome.result;
        let time = match result.status {
            CheckStatus::Skipped => "-".to_string(),
            _ => format!("{:.2?}", result.duration),
        };
        builder.push_record([
            outcome.name.to_string(),
            result.status.painted().to_string(),
            time,
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!(
        "{}\n{table}\n\n{}\n{}\n",
        format_header(report).bold(),
        format_tally(report),
        format_verdict(report)
    )
}

fn format_tally(report: &HealthCheckReport) -> String {
    let mut parts = vec![format!("{} passed", report.passed).green().to_string()];
    if report.warned > 0 {
        parts.push(format!("{} warned", report.warned).yellow().to_string());
    }
    if report.failed > 0 {
        parts.push(format!("{} failed", report.failed).red().to_string());
    }
    if report.skipped > 0 {
        parts.push(format!("{} skipped", report.skipped).dimmed().to_string());
    }
    format!("{} checks: {}", report.total, parts.join(", "))
}

fn format_verdict(report: &HealthCheckReport) -> String {
    let verdict = match (report.is_healthy(), report.has_warnings()) {
        (false, _) => "UNHEALTHY".red(),
        (true, true) => "HEALTHY (with warnings)".yellow(),
        (true, false) => "HEALTHY".green(),
    };
    format!("Overall: {}", verdict.bold())
}

/// Prints the report, then the details of every check that has some
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for outcome in &report.results {
        let Some(details) = &outcome.result.details else {
            continue;
        };
        println!("{}", outcome.name.bold());
        if let Some(description) = outcome.description {
            println!("  {}", description.italic());
        }
        println!("{details}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::{CheckResult, HealthCheckRunner, SystemCheck};

    struct Gpu;

    impl SystemCheck for Gpu {
        fn name(&self) -> &'static str {
            "Adapter"
        }

        fn check(&self) -> CheckResult {
            CheckResult::pass("found")
        }

        fn requires_gpu(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_header_names_suite_and_profile() {
        let report = HealthCheckRunner::new().with_profile("debug").run();
        let header = format_header(&report);
        assert!(header.starts_with("hello-gpu health"));
        assert!(header.contains("profile: debug"));
    }

    #[test]
    fn test_skipped_row_and_tally() {
        colored::control::set_override(false);
        let report = HealthCheckRunner::new().add_check(Gpu).without_gpu().run();
        let text = format_report(&report);
        assert!(text.contains("Adapter"));
        assert!(text.contains("SKIP"));
        assert!(text.contains("1 checks: 0 passed, 1 skipped"));
        assert!(text.contains("Overall: HEALTHY"));
    }
}
