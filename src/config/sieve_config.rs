// src/config/sieve_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for the sieve binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Inclusive upper bound to sieve to
    pub bound: u64,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Print the extracted primes, one per line
    pub print_primes: bool,

    /// Print the raw bit table rows (diagnostic)
    pub print_table: bool,

    /// Where to save the timing suite JSON, if anywhere
    pub results_path: Option<String>,
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            bound: 1000,
            log_level: "info".to_string(),
            print_primes: true,
            print_table: false,
            results_path: None,
        }
    }
}

impl SieveConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("bitsieve.toml")
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bound", 1000u64)?
            .set_default("log_level", "info")?
            .set_default("print_primes", true)?
            .set_default("print_table", false)?
            .set_default("results_path", None::<String>)?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: BITSIEVE_)
        builder = builder.add_source(Environment::with_prefix("BITSIEVE").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SieveConfig::default();
        assert_eq!(config.bound, 1000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.print_primes, true);
        assert_eq!(config.print_table, false);
        assert!(config.results_path.is_none());
    }

    #[test]
    fn test_load_without_file() {
        // Should fall through to defaults when no config file exists
        let config =
            SieveConfig::load_from_file("no_such_file.toml").unwrap_or_else(|_| SieveConfig::default());
        assert_eq!(config.bound, 1000);
    }
}
