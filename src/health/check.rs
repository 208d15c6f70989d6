//! Check outcomes and the trait every startup check implements

use std::time::Duration;

use colored::{ColoredString, Colorize};

/// Verdict of one check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Usable, but a demo loses something (text, an adapter feature)
    Warn,
    Fail,
    /// Not run; the suite was started without a GPU
    Skipped,
}

impl CheckStatus {
    /// Pass, Warn and Skipped all let the demos start
    pub fn is_ok(self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(self) -> bool {
        self == CheckStatus::Fail
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Skipped => "SKIP",
        }
    }

    /// Label painted for a terminal
    pub fn painted(self) -> ColoredString {
        match self {
            CheckStatus::Pass => self.label().green(),
            CheckStatus::Warn => self.label().yellow(),
            CheckStatus::Fail => self.label().red(),
            CheckStatus::Skipped => self.label().dimmed(),
        }
    }
}

/// What a check found, plus how long it took
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One line for the report table
    pub message: String,
    /// Multi-line findings printed below the table
    pub details: Option<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Skipped, reason)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A startup prerequisite of the demos
pub trait SystemCheck {
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    /// Shown above the check's details in the printed report
    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Checks that open a wgpu instance return true; the runner can skip them
    fn requires_gpu(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fail_blocks() {
        assert!(CheckStatus::Pass.is_ok());
        assert!(CheckStatus::Warn.is_ok());
        assert!(CheckStatus::Skipped.is_ok());
        assert!(CheckStatus::Fail.is_fail());
    }

    #[test]
    fn test_builders_keep_message_and_details() {
        let result = CheckResult::skipped("no adapter").with_details("line");
        assert_eq!(result.status, CheckStatus::Skipped);
        assert_eq!(result.message, "no adapter");
        assert_eq!(result.details.as_deref(), Some("line"));
        assert_eq!(result.duration, Duration::ZERO);
    }
}
