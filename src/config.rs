use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::report::Format;
use crate::topn::DEFAULT_TOP_N;

/// File read when no input is given on the command line or in `INPUT_FILE`.
pub const DEFAULT_INPUT_FILE: &str = "file.txt";

/// Settings taken from the environment (and a `.env` file, if present).
///
/// Command-line flags take precedence over every field here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub top_n: usize,
    pub format: Format,
    pub input_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            top_n: DEFAULT_TOP_N,
            format: Format::Text,
            input_file: DEFAULT_INPUT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load a `.env` file if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let top_n = match lookup("TOP_N") {
            Some(value) => parse_value("TOP_N", &value)?,
            None => defaults.top_n,
        };
        let format = match lookup("OUTPUT_FORMAT") {
            Some(value) => parse_value("OUTPUT_FORMAT", &value)?,
            None => defaults.format,
        };
        let input_file = lookup("INPUT_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.input_file);

        Ok(Config {
            top_n,
            format,
            input_file,
        })
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| Error::Config {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 10);
        assert_eq!(config.input_file, "file.txt");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TOP_N", " 25 "),
            ("OUTPUT_FORMAT", "json"),
            ("INPUT_FILE", "moby.txt"),
        ]))
        .unwrap();
        assert_eq!(config.top_n, 25);
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.input_file, "moby.txt");
    }

    #[test]
    fn test_invalid_top_n() {
        let Error::Config { key, value, .. } =
            Config::from_lookup(lookup(&[("TOP_N", "ten")])).unwrap_err();
        assert_eq!(key, "TOP_N");
        assert_eq!(value, "ten");
    }

    #[test]
    fn test_invalid_format() {
        assert!(Config::from_lookup(lookup(&[("OUTPUT_FORMAT", "xml")])).is_err());
    }
}
