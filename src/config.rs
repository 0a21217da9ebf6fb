//! Configuration for the tournament driver.

use std::path::PathBuf;

/// Default location of the entries file.
const DEFAULT_ENTRIES_PATH: &str = "entries.json";

/// Configuration for running a tournament from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// JSON file holding an array of entry names.
    ///
    /// Default: `entries.json`. Configure via `VOTE_RUNOFF_ENTRIES`.
    pub entries_path: PathBuf,

    /// Whether to open the first matchup straight after loading entries.
    ///
    /// Default: true. Configure via `VOTE_RUNOFF_AUTO_START`.
    pub auto_start: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverConfig {
    /// Creates a `DriverConfig` with default values.
    pub fn new() -> Self {
        DriverConfig {
            entries_path: PathBuf::from(DEFAULT_ENTRIES_PATH),
            auto_start: true,
        }
    }

    /// Creates a `DriverConfig` from environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        let entries_path = lookup("VOTE_RUNOFF_ENTRIES")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.entries_path);
        let auto_start = lookup("VOTE_RUNOFF_AUTO_START")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.auto_start);

        DriverConfig {
            entries_path,
            auto_start,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> DriverConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DriverConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), DriverConfig::new());
    }

    #[test]
    fn reads_entries_path_and_flag() {
        let config = config_from(&[
            ("VOTE_RUNOFF_ENTRIES", "/tmp/films.json"),
            ("VOTE_RUNOFF_AUTO_START", "off"),
        ]);
        assert_eq!(config.entries_path, PathBuf::from("/tmp/films.json"));
        assert!(!config.auto_start);
    }

    #[test]
    fn ignores_garbage_values() {
        let config = config_from(&[
            ("VOTE_RUNOFF_ENTRIES", "  "),
            ("VOTE_RUNOFF_AUTO_START", "maybe"),
        ]);
        assert_eq!(config, DriverConfig::new());
    }
}
