//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::replies::WELCOME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name shown above the conversation
    #[serde(default = "default_advisor_name")]
    pub advisor_name: String,

    /// Simulated latency before the assistant reply lands (milliseconds)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// chrono format string used to stamp messages with local time
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Assistant message seeded into every new conversation
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_advisor_name() -> String {
    "Insurance Advisor".into()
}
fn default_reply_delay_ms() -> u64 {
    650
}
fn default_timestamp_format() -> String {
    "%H:%M".into()
}
fn default_welcome_message() -> String {
    WELCOME.into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse advisor.yaml")?;

        if let Ok(name) = std::env::var("ADVISOR_NAME") {
            config.advisor_name = name;
        }

        if let Ok(delay) = std::env::var("ADVISOR_REPLY_DELAY_MS") {
            config.reply_delay_ms = delay
                .parse()
                .with_context(|| format!("ADVISOR_REPLY_DELAY_MS is not a number: {}", delay))?;
        }

        if config.timestamp_format.trim().is_empty() {
            anyhow::bail!("timestamp_format must not be empty");
        }

        Ok(config)
    }

    /// Load config from the default location (project_root/advisor.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        Self::load(&project_root.join("advisor.yaml"))
    }

    /// Like `load_from_dir`, but a missing advisor.yaml means defaults.
    /// A file that exists and fails to parse or validate is still an error.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("advisor.yaml");
        if !config_path.exists() {
            info!("No {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advisor_name: default_advisor_name(),
            reply_delay_ms: default_reply_delay_ms(),
            timestamp_format: default_timestamp_format(),
            welcome_message: default_welcome_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;

    // Env overrides are process-wide; every test that loads a file holds this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_load_config_defaults() {
        let _env = env_lock();
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "advisor_name: Ada").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 650);
        assert_eq!(config.timestamp_format, "%H:%M");
        assert_eq!(config.welcome_message, WELCOME);
    }

    #[test]
    fn test_load_config_custom_values() {
        let _env = env_lock();
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "reply_delay_ms: 100\ntimestamp_format: \"%H:%M:%S\"\nwelcome_message: Hello there"
        )
        .unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 100);
        assert_eq!(config.reply_delay(), std::time::Duration::from_millis(100));
        assert_eq!(config.timestamp_format, "%H:%M:%S");
        assert_eq!(config.welcome_message, "Hello there");
    }

    #[test]
    fn test_empty_timestamp_format_fails() {
        let _env = env_lock();
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "timestamp_format: \"\"").unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let _env = env_lock();
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "advisor_name: Ada\nreply_delay_ms: 100").unwrap();

        std::env::set_var("ADVISOR_NAME", "Grace");
        std::env::set_var("ADVISOR_REPLY_DELAY_MS", "250");
        let loaded = Config::load(tmp.path());

        std::env::set_var("ADVISOR_REPLY_DELAY_MS", "soon");
        let bad_delay = Config::load(tmp.path());

        std::env::remove_var("ADVISOR_NAME");
        std::env::remove_var("ADVISOR_REPLY_DELAY_MS");

        let config = loaded.unwrap();
        assert_eq!(config.advisor_name, "Grace");
        assert_eq!(config.reply_delay_ms, 250);
        assert!(bad_delay.is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.reply_delay_ms, 650);
        assert_eq!(config.advisor_name, "Insurance Advisor");
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();

        std::fs::write(dir.path().join("advisor.yaml"), "reply_delay_ms: [oops").unwrap();
        assert!(Config::load_or_default(dir.path()).is_err());

        std::fs::write(dir.path().join("advisor.yaml"), "timestamp_format: \"\"").unwrap();
        assert!(Config::load_or_default(dir.path()).is_err());

        std::fs::write(dir.path().join("advisor.yaml"), "reply_delay_ms: 10").unwrap();
        assert_eq!(Config::load_or_default(dir.path()).unwrap().reply_delay_ms, 10);
    }
}
