use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against an isolated config file
pub struct CliTestHarness {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness whose config file does not exist yet
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("cadence.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Create a harness with the given TOML written to its config file
    pub fn with_config(contents: &str) -> Self {
        let harness = Self::new();
        fs::write(&harness.config_path, contents).expect("Failed to write config");
        harness
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");

        // Keep the caller's environment out of the test
        for (key, _) in std::env::vars() {
            if key.starts_with("CADENCE_") {
                cmd.env_remove(&key);
            }
        }
        cmd.arg("--config").arg(&self.config_path);

        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common rule arguments
pub struct TestFixtures;

impl TestFixtures {
    /// Monday, Wednesday and Friday starting Monday 2024-01-01
    pub fn mwf_weekly_args() -> Vec<&'static str> {
        vec![
            "--every", "weekly",
            "--on", "mon,wed,fri",
            "--start", "2024-01-01",
        ]
    }

    /// The last Friday of every month from 2024-01-01
    pub fn last_friday_args() -> Vec<&'static str> {
        vec![
            "--every", "monthly",
            "--weekday", "friday",
            "--position", "last",
            "--start", "2024-01-01",
        ]
    }
}

/// Build an argument list from a subcommand, its rule and extra flags
pub fn args<'a>(command: &'a str, rule: &[&'a str], extra: &[&'a str]) -> Vec<&'a str> {
    let mut all = vec![command];
    all.extend_from_slice(rule);
    all.extend_from_slice(extra);
    all
}
