//! Build-time information
//!
//! This module provides access to build metadata captured at compile time,
//! including build timestamps, cargo configuration, compiler version and,
//! when built from a checkout, the git revision.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, x86_64-apple-darwin)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.75.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git commit SHA, when built from a git checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Git branch name
pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

/// Git commit timestamp
pub const GIT_COMMIT_TIMESTAMP: Option<&str> = option_env!("VERGEN_GIT_COMMIT_TIMESTAMP");

/// Whether the working tree had uncommitted changes ("true"/"false")
pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// Placeholder vergen emits when git metadata could not be gathered
const IDEMPOTENT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

fn known(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.is_empty() && *v != IDEMPOTENT)
}

/// First seven characters of the commit SHA
pub fn git_sha_short() -> Option<&'static str> {
    known(GIT_SHA).map(|sha| sha.get(..7).unwrap_or(sha))
}

/// `branch@sha` plus a dirty marker, `None` outside a git checkout
pub fn git_summary() -> Option<String> {
    let sha = git_sha_short()?;
    let branch = known(GIT_BRANCH).unwrap_or("detached");
    let dirty = if known(GIT_DIRTY) == Some("true") {
        " (dirty)"
    } else {
        ""
    };
    Some(format!("{branch}@{sha}{dirty}"))
}

/// Returns a formatted build version string
///
/// Format: `{target_triple}-opt{opt_level}`
/// Example: `x86_64-apple-darwin-opt3` or `x86_64-unknown-linux-gnu-opt0`
pub fn version_string() -> String {
    format!("{}-opt{}", CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}

/// Returns a detailed build info string
///
/// Includes build timestamp, target, optimization level, and compiler version
pub fn detailed_info() -> String {
    let mut info = format!(
        "Built: {}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        BUILD_TIMESTAMP, CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL, RUSTC_SEMVER, RUSTC_CHANNEL
    );
    if let Some(git) = git_summary() {
        info.push_str(&format!("\nGit: {git}"));
    }
    info
}
