//! Ambient configuration: resource bounds and validator strictness.
//!
//! Validator strictness is threaded through as an explicit [`ValidatorProfile`] parameter
//! rather than an environment variable, so a caller's profile choice is visible at every
//! call site instead of being implicit global state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorProfile {
    /// Full strictness: meaningful-logic, too-simple, diversity and complexity checks.
    Production,
    /// Relaxed to a minimum token-presence check, for unit tests and local iteration.
    TestDevelopment,
}

impl Default for ValidatorProfile {
    fn default() -> Self {
        ValidatorProfile::Production
    }
}

/// Resource bounds and defaults, loadable from a TOML file by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub max_file_size_bytes: usize,
    pub max_snippets_per_file: usize,
    pub pass_wall_clock_budget_ms: u64,
    pub cache_capacity: usize,
    pub validator_profile: ValidatorProfile,
    pub max_rule_depth: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 1024 * 1024,
            max_snippets_per_file: 1_000,
            pass_wall_clock_budget_ms: 30_000,
            cache_capacity: 256,
            validator_profile: ValidatorProfile::default(),
            max_rule_depth: 50,
        }
    }
}
