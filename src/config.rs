use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
///
/// Nothing here carries a baked-in credential. A missing `SANITY_PROJECT_ID`
/// puts the site into fallback mode and a missing `GEMINI_API_KEY` disables
/// the chat endpoint; both are reported at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // Content backend
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub sanity_api_host: Option<String>,
    pub sanity_token: Option<String>,
    pub sanity_timeout: Duration,

    // Chat model
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout: Duration,

    // Article list cache
    pub article_cache_ttl: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Content backend
            sanity_project_id: optional_env("SANITY_PROJECT_ID"),
            sanity_dataset: env_or_default("SANITY_DATASET", "production"),
            sanity_api_version: env_or_default("SANITY_API_VERSION", "2023-05-03"),
            sanity_use_cdn: parse_env_bool("SANITY_USE_CDN", true)?,
            sanity_api_host: optional_env("SANITY_API_HOST"),
            sanity_token: optional_env("SANITY_TOKEN"),
            sanity_timeout: Duration::from_secs(parse_env_u64("SANITY_TIMEOUT_SECS", 15)?),

            // Chat model
            gemini_api_key: raw_env("GEMINI_API_KEY"),
            gemini_model: env_or_default("GEMINI_MODEL", "gemini-1.5-flash"),
            gemini_api_base: env_or_default(
                "GEMINI_API_BASE",
                "https://generativelanguage.googleapis.com",
            ),
            gemini_timeout: Duration::from_secs(parse_env_u64("GEMINI_TIMEOUT_SECS", 60)?),

            article_cache_ttl: Duration::from_secs(parse_env_u64("ARTICLE_CACHE_TTL_SECS", 60)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// A configuration with no backend and no chat key, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            sanity_project_id: None,
            sanity_dataset: "production".to_string(),
            sanity_api_version: "2023-05-03".to_string(),
            sanity_use_cdn: false,
            sanity_api_host: None,
            sanity_token: None,
            sanity_timeout: Duration::from_secs(5),
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_api_base: "https://generativelanguage.googleapis.com".to_string(),
            gemini_timeout: Duration::from_secs(5),
            article_cache_ttl: Duration::ZERO,
            web_host: "127.0.0.1".to_string(),
            web_port: 8080,
        }
    }

    /// Whether a content backend project is configured.
    #[must_use]
    pub fn sanity_configured(&self) -> bool {
        self.sanity_project_id.is_some()
    }

    /// Base URL for the content query API.
    ///
    /// Returns `None` when no project is configured.
    #[must_use]
    pub fn sanity_base_url(&self) -> Option<String> {
        let project = self.sanity_project_id.as_deref()?;
        if let Some(host) = &self.sanity_api_host {
            return Some(host.trim_end_matches('/').to_string());
        }
        let domain = if self.sanity_use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        Some(format!("https://{project}.{domain}"))
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(project) = &self.sanity_project_id {
            if !project
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            {
                return Err(ConfigError::InvalidValue {
                    name: "SANITY_PROJECT_ID".to_string(),
                    message: format!("must contain only a-z, 0-9 and '-', got '{project}'"),
                });
            }
        }
        if self.sanity_dataset.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SANITY_DATASET".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.sanity_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "SANITY_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.gemini_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "GEMINI_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(key) = &self.gemini_api_key {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "GEMINI_API_KEY".to_string(),
                    message: "is set but blank; unset it to disable chat".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Read a variable exactly as set, including blank values.
fn raw_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "SANITY_PROJECT_ID",
        "SANITY_DATASET",
        "SANITY_USE_CDN",
        "SANITY_API_HOST",
        "GEMINI_API_KEY",
        "WEB_PORT",
    ];

    fn clear_vars() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_env_bool("NONEXISTENT_VAR", true).unwrap());
        assert!(!parse_env_bool("NONEXISTENT_VAR", false).unwrap());
    }

    #[test]
    #[serial]
    fn test_defaults_without_backend() {
        clear_vars();
        let config = Config::from_env().unwrap();
        assert!(!config.sanity_configured());
        assert_eq!(config.sanity_dataset, "production");
        assert!(config.gemini_api_key.is_none());
        assert!(config.sanity_base_url().is_none());
        config.validate().unwrap();
    }

    #[test]
    #[serial]
    fn test_cdn_host_derivation() {
        clear_vars();
        std::env::set_var("SANITY_PROJECT_ID", "abc123");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.sanity_base_url().as_deref(),
            Some("https://abc123.apicdn.sanity.io")
        );

        std::env::set_var("SANITY_USE_CDN", "false");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.sanity_base_url().as_deref(),
            Some("https://abc123.api.sanity.io")
        );
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_bool_is_reported() {
        clear_vars();
        std::env::set_var("SANITY_USE_CDN", "maybe");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseBool { .. }));
        clear_vars();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_fails_validation() {
        clear_vars();
        std::env::set_var("GEMINI_API_KEY", "   ");
        let config = Config::from_env().unwrap();
        assert!(config.validate().is_err());
        clear_vars();
    }

    #[test]
    fn test_project_id_charset() {
        let config = Config {
            sanity_project_id: Some("Bad Project".to_string()),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            sanity_project_id: Some("b69czsvq".to_string()),
            ..Config::for_testing()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_host_override_trims_slash() {
        let config = Config {
            sanity_project_id: Some("abc123".to_string()),
            sanity_api_host: Some("http://127.0.0.1:9999/".to_string()),
            ..Config::for_testing()
        };
        assert_eq!(
            config.sanity_base_url().as_deref(),
            Some("http://127.0.0.1:9999")
        );
    }
}
