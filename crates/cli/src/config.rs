//! CLI-specific configuration for the terminal frontend.
use std::env;
use std::path::PathBuf;

/// Terminal frontend configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Target generations per second; 0 runs unthrottled.
    pub rate: u32,
    /// Directory searched for `<name>.cells` pattern files.
    pub pattern_dir: PathBuf,
    /// Directory the log file is written to.
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LIFE_PATTERN_DIR` - pattern file directory (default: `patterns`)
    /// - `LIFE_LOG_DIR` - log file directory (default: system temp dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("LIFE_PATTERN_DIR") {
            config.pattern_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env::var_os("LIFE_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rate: 0,
            pattern_dir: PathBuf::from("patterns"),
            log_dir: env::temp_dir(),
        }
    }
}
