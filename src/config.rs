//! Runtime configuration for the terminal front end, read from the environment.

use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "TUI_2048_SEED";

/// Environment variable naming a log file; logging is off when unset.
pub const LOG_PATH_ENV: &str = "TUI_2048_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Seed for tile spawning. Same seed and same inputs replay the same game.
    pub seed: u64,
    /// Where to write logs. `None` disables logging so the alternate screen
    /// stays clean.
    pub log_path: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_clock(lookup, clock_seed)
    }

    fn from_lookup_with_clock(
        lookup: impl Fn(&str) -> Option<String>,
        clock: impl FnOnce() -> u64,
    ) -> Self {
        let seed = lookup(SEED_ENV)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock);

        let log_path = lookup(LOG_PATH_ENV)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { seed, log_path }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_seed_and_log_path() {
        let cfg = RunnerConfig::from_lookup(lookup(&[
            (SEED_ENV, " 42 "),
            (LOG_PATH_ENV, "/tmp/2048.log"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/2048.log"));
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let cfg = RunnerConfig::from_lookup(lookup(&[(SEED_ENV, "7"), (LOG_PATH_ENV, "  ")]));
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn unparsable_seed_falls_back_to_clock() {
        let cfg = RunnerConfig::from_lookup_with_clock(
            lookup(&[(SEED_ENV, "not-a-number"), (LOG_PATH_ENV, "game.log")]),
            || 99,
        );
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.log_path.as_deref(), Some("game.log"));

        let cfg = RunnerConfig::from_lookup_with_clock(lookup(&[]), || 5);
        assert_eq!(cfg, RunnerConfig { seed: 5, log_path: None });
    }

    #[test]
    fn valid_seed_ignores_clock() {
        let cfg = RunnerConfig::from_lookup_with_clock(lookup(&[(SEED_ENV, "3")]), || 99);
        assert_eq!(cfg.seed, 3);
    }
}
