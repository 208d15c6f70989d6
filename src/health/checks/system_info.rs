//! System information health check

use sysinfo::System;

use crate::health::check::{CheckResult, SystemCheck};

/// Checks that host information shown in the debug window can be gathered
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates OS, CPU, and memory information gathering")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
        let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());
        let kernel_version = System::kernel_version().unwrap_or_else(|| "Unknown".to_string());
        let mut details = vec![
            format!("  OS: {os_name} {os_version}"),
            format!("  Kernel: {kernel_version}"),
        ];

        let physical_cores = System::physical_core_count().unwrap_or(0);
        let logical_cores = sys.cpus().len();
        if logical_cores == 0 {
            return CheckResult::warn("Unable to detect CPU cores")
                .with_details(details.join("\n"));
        }
        details.push(format!(
            "  CPU cores: {physical_cores} physical, {logical_cores} logical"
        ));

        let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;
        details.push(format!("  Memory: {total_memory_gb:.1} GB total"));
        if total_memory_gb < 1.0 {
            return CheckResult::warn("Low memory detected").with_details(details.join("\n"));
        }

        CheckResult::pass("System info gathered successfully").with_details(details.join("\n"))
    }
}
