//! Runtime configuration for the `fortios-validate` binary.
//!
//! Values come from the environment (a `.env` file is loaded by `main`),
//! and a command line argument overrides the input document.

use std::env;
use std::error::Error;

/// Environment variable naming the document to validate.
pub const INPUT_VAR: &str = "FORTIOS_VALIDATE_INPUT";
/// Environment variable naming the log4rs configuration file.
pub const LOG_CONFIG_VAR: &str = "FORTIOS_LOG_CONFIG";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_file: String,
    pub log_config: String,
}

impl Config {
    /// Build from an optional CLI argument and a variable lookup.
    pub fn resolve<F>(arg: Option<String>, lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_file = arg
            .or_else(|| lookup(INPUT_VAR))
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| {
                format!("No document given: pass a path or set {INPUT_VAR}")
            })?;
        let log_config = lookup(LOG_CONFIG_VAR).unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        Ok(Config {
            input_file,
            log_config,
        })
    }

    pub fn from_env(arg: Option<String>) -> Result<Config, Box<dyn Error>> {
        Config::resolve(arg, |key| env::var(key).ok())
    }
}
