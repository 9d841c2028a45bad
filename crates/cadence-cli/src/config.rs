use cadence_core::recurrence::{GenerationConfig, DEFAULT_MAX_DATES, DEFAULT_PREVIEW_COUNT};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from `cadence.toml` and `CADENCE_*` environment variables.
/// Environment values win over the file; anything unset keeps its default.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Occurrences shown by `preview` when no count is given
    pub preview_count: usize,
    /// Upper bound on occurrences any single command will generate
    pub max_dates: usize,
    /// Scan budget per requested occurrence, scaled by the rule's period
    pub iteration_multiplier: usize,
    /// How far `next` looks ahead before giving up (days)
    pub search_horizon_days: u64,
    /// Default log filter when `CADENCE_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            preview_count: DEFAULT_PREVIEW_COUNT,
            max_dates: DEFAULT_MAX_DATES,
            iteration_multiplier: generation.iteration_multiplier,
            search_horizon_days: generation.search_horizon_days,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CADENCE_"))
            .extract()
    }

    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            iteration_multiplier: self.iteration_multiplier.max(1),
            search_horizon_days: self.search_horizon_days,
        }
    }

    /// Clamp a requested occurrence count to `max_dates`.
    pub fn limit(&self, requested: usize) -> usize {
        requested.min(self.max_dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.preview_count, 5);
        assert_eq!(config.max_dates, 100);
        assert_eq!(config.iteration_multiplier, 10);
        assert_eq!(config.search_horizon_days, 3660);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadence.toml");
        fs::write(&path, "preview_count = 3\nmax_dates = 20\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.preview_count, 3);
        assert_eq!(config.max_dates, 20);
        assert_eq!(config.iteration_multiplier, 10);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cadence.toml");
        fs::write(&path, "preview_count = \"many\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_generation_config() {
        let config = Config {
            iteration_multiplier: 0,
            search_horizon_days: 30,
            ..Config::default()
        };
        let generation = config.generation();
        assert_eq!(generation.iteration_multiplier, 1);
        assert_eq!(generation.search_horizon_days, 30);
    }

    #[test]
    fn test_limit() {
        let config = Config {
            max_dates: 5,
            ..Config::default()
        };
        assert_eq!(config.limit(3), 3);
        assert_eq!(config.limit(50), 5);
    }
}
