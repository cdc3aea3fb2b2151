//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos site options (address, site root) are read separately by
//! `get_configuration` from `[package.metadata.leptos]`.

use thiserror::Error;

pub const DEFAULT_STATIC_MAX_AGE: u64 = 3600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number of seconds, got `{value}`")]
    InvalidSeconds { var: &'static str, value: String },

    #[error("{var} must be `true` or `false`, got `{value}`")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `Cache-Control: max-age` for static assets, in seconds.
    /// Env: `STATIC_MAX_AGE`, default 3600.
    pub static_max_age: u64,

    /// Whether responses are Brotli/gzip compressed.
    /// Env: `COMPRESSION`, default true.
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let static_max_age = match lookup("STATIC_MAX_AGE") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeconds {
                    var: "STATIC_MAX_AGE",
                    value,
                })?,
            None => DEFAULT_STATIC_MAX_AGE,
        };

        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_flag("COMPRESSION", value)?,
            None => true,
        };

        Ok(Self {
            static_max_age,
            compression,
        })
    }

    /// Value for the `Cache-Control` header on static assets.
    pub fn cache_control(&self) -> String {
        if self.static_max_age == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.static_max_age)
        }
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_max_age: DEFAULT_STATIC_MAX_AGE,
            compression: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var mutation - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.static_max_age, 3600);
        assert!(config.compression);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("STATIC_MAX_AGE", " 86400 "),
            ("COMPRESSION", "off"),
        ]))
        .unwrap();
        assert_eq!(config.static_max_age, 86400);
        assert!(!config.compression);
    }

    #[test]
    fn test_flag_spellings() {
        for value in ["1", "TRUE", "yes", "On"] {
            let config = Config::from_lookup(lookup(&[("COMPRESSION", value)])).unwrap();
            assert!(config.compression, "{value}");
        }
        for value in ["0", "False", "no", "OFF"] {
            let config = Config::from_lookup(lookup(&[("COMPRESSION", value)])).unwrap();
            assert!(!config.compression, "{value}");
        }
    }

    #[test]
    fn test_invalid_max_age() {
        let err = Config::from_lookup(lookup(&[("STATIC_MAX_AGE", "an hour")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSeconds {
                var: "STATIC_MAX_AGE",
                value: "an hour".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "STATIC_MAX_AGE must be a number of seconds, got `an hour`"
        );
    }

    #[test]
    fn test_negative_max_age_rejected() {
        assert!(Config::from_lookup(lookup(&[("STATIC_MAX_AGE", "-1")])).is_err());
    }

    #[test]
    fn test_invalid_flag() {
        let err = Config::from_lookup(lookup(&[("COMPRESSION", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { var: "COMPRESSION", .. }));
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(Config::default().cache_control(), "public, max-age=3600");
        let config = Config {
            static_max_age: 0,
            compression: true,
        };
        assert_eq!(config.cache_control(), "no-cache");
    }
}
