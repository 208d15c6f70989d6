//! Runs a suite of checks against one config profile

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};
use super::checks;
use crate::app::AppConfig;

/// One row of a report
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub result: CheckResult,
}

/// Everything a suite run found
#[derive(Debug)]
pub struct HealthCheckReport {
    /// Config profile the checks ran against
    pub profile: String,
    pub results: Vec<CheckOutcome>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl HealthCheckReport {
    fn tally(profile: String, results: Vec<CheckOutcome>) -> Self {
        let count = |status| results.iter().filter(|o| o.result.status == status).count();
        Self {
            profile,
            total: results.len(),
            passed: count(CheckStatus::Pass),
            warned: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
            skipped: count(CheckStatus::Skipped),
            results,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Outcome of the check called `name`
    pub fn get(&self, name: &str) -> Option<&CheckOutcome> {
        self.results.iter().find(|o| o.name == name)
    }

    /// Process exit code: 1 on any failure, else 2 on any warning, else 0
    ///
    /// Skipped checks count as neither.
    pub fn exit_code(&self) -> i32 {
        match (self.failed, self.warned) {
            (0, 0) => 0,
            (0, _) => 2,
            _ => 1,
        }
    }
}

/// Ordered list of checks plus the run options
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
    profile: String,
    gpu: bool,
}

impl HealthCheckRunner {
    /// Empty suite for the active profile, GPU checks enabled
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            profile: AppConfig::active_profile(),
            gpu: true,
        }
    }

    /// Every check the demos depend on, cheapest first
    pub fn standard() -> Self {
        Self::new()
            .add_check(checks::ConfigCheck::new())
            .add_check(checks::UiStateCheck::new())
            .add_check(checks::GlyphAtlasCheck::new())
            .add_check(checks::DebugUICheck::new())
            .add_check(checks::BuildInfoCheck::new())
            .add_check(checks::SystemInfoCheck::new())
            .add_check(checks::GraphicsBackendCheck::new())
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Records checks that need a GPU as skipped instead of running them
    pub fn without_gpu(mut self) -> Self {
        self.gpu = false;
        self
    }

    /// Names the profile shown in the report
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn run(self) -> HealthCheckReport {
        let gpu = self.gpu;
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let result = if check.requires_gpu() && !gpu {
                    CheckResult::skipped("GPU checks disabled for this run")
                } else {
                    let start = Instant::now();
                    let result = check.check();
                    result.with_duration(start.elapsed())
                };
                match result.status {
                    CheckStatus::Fail => warn!(check = check.name(), message = %result.message, "Health check failed"),
                    status => debug!(check = check.name(), status = status.label(), "Health check finished"),
                }
                CheckOutcome {
                    name: check.name(),
                    description: check.description(),
                    result,
                }
            })
            .collect();

        HealthCheckReport::tally(self.profile, results)
    }
}

impl Default for HealthCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, CheckStatus, bool);

    impl SystemCheck for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self) -> CheckResult {
            match self.1 {
                CheckStatus::Pass => CheckResult::pass("ok"),
                CheckStatus::Warn => CheckResult::warn("meh"),
                CheckStatus::Fail => CheckResult::fail("broken"),
                CheckStatus::Skipped => CheckResult::skipped("n/a"),
            }
        }

        fn requires_gpu(&self) -> bool {
            self.2
        }
    }

    #[test]
    fn test_exit_codes() {
        let run = |statuses: &[CheckStatus]| {
            statuses
                .iter()
                .fold(HealthCheckRunner::new(), |runner, &s| runner.add_check(Fixed("c", s, false)))
                .run()
                .exit_code()
        };
        assert_eq!(run(&[]), 0);
        assert_eq!(run(&[CheckStatus::Pass, CheckStatus::Skipped]), 0);
        assert_eq!(run(&[CheckStatus::Pass, CheckStatus::Warn]), 2);
        assert_eq!(run(&[CheckStatus::Warn, CheckStatus::Fail]), 1);
    }

    #[test]
    fn test_gpu_checks_skipped_without_gpu() {
        // Would fail if it ran
        let report = HealthCheckRunner::new()
            .add_check(Fixed("cpu", CheckStatus::Pass, false))
            .add_check(Fixed("gpu", CheckStatus::Fail, true))
            .without_gpu()
            .run();

        assert_eq!((report.total, report.passed, report.skipped, report.failed), (2, 1, 1, 0));
        assert_eq!(report.get("gpu").map(|o| o.result.status), Some(CheckStatus::Skipped));
        assert!(report.is_healthy());
    }

    #[test]
    fn test_gpu_checks_run_by_default() {
        let report = HealthCheckRunner::new()
            .add_check(Fixed("gpu", CheckStatus::Fail, true))
            .run();
        assert_eq!(report.failed, 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_profile_override() {
        let report = HealthCheckRunner::new().with_profile("debug").run();
        assert_eq!(report.profile, "debug");
        assert_eq!(report.total, 0);
    }
}
