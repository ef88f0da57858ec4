//! Configuration management for pubdoc.
//!
//! Configuration comes from four environment variables:
//!
//! - `CONFLUENCE_DOMAIN` - Confluence Cloud hostname, without scheme
//! - `CONFLUENCE_SPACEID` - ID of the space pages are published into
//! - `CONFLUENCE_USERNAME` - account used for basic authentication
//! - `CONFLUENCE_API_KEY` - API token paired with the username
//!
//! A dotenv file may supply the same variables. Values set in the process
//! environment take precedence over the file, and CLI settings take precedence
//! over both.
//!
//! Missing values are not an error here: they become empty strings and the
//! Confluence API rejects the request later.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Environment variable holding the Confluence hostname.
pub const DOMAIN_VAR: &str = "CONFLUENCE_DOMAIN";
/// Environment variable holding the target space ID.
pub const SPACE_ID_VAR: &str = "CONFLUENCE_SPACEID";
/// Environment variable holding the basic-auth username.
pub const USERNAME_VAR: &str = "CONFLUENCE_USERNAME";
/// Environment variable holding the basic-auth API key.
pub const API_KEY_VAR: &str = "CONFLUENCE_API_KEY";

/// Env file loaded when no explicit path is given.
const DEFAULT_ENV_FILE: &str = ".env";

/// CLI settings that override environment values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Confluence domain.
    pub domain: Option<String>,
    /// Override target space ID.
    pub space_id: Option<String>,
}

/// Basic-auth credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Atlassian account username (usually an e-mail address).
    pub username: String,
    /// API token for the account.
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &api_key)
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Confluence hostname, e.g. `example.atlassian.net`.
    pub domain: String,
    /// Target space ID.
    pub space_id: String,
    /// Basic-auth credentials.
    pub credentials: Credentials,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested env file does not exist.
    #[error("Environment file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Env file exists but could not be read or parsed.
    #[error("Failed to read environment file {}: {source}", path.display())]
    EnvFile {
        /// Path of the env file.
        path: PathBuf,
        /// Underlying dotenv error.
        #[source]
        source: dotenvy::Error,
    },
}

impl Config {
    /// Load configuration from an env file, the process environment and CLI settings.
    ///
    /// If `env_file` is provided it must exist. Otherwise `.env` in the current
    /// directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns error if the explicit `env_file` doesn't exist or any env file
    /// fails to parse.
    pub fn load(
        env_file: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let file_vars = match env_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                read_env_file(path)?
            }
            None => {
                let path = Path::new(DEFAULT_ENV_FILE);
                if path.exists() {
                    read_env_file(path)?
                } else {
                    debug!("No {} file found, using process environment", DEFAULT_ENV_FILE);
                    HashMap::new()
                }
            }
        };

        let mut config = Self::layered(&file_vars, |name| std::env::var(name).ok());

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        for field in config.missing_fields() {
            warn!("{field} is not set; Confluence requests will likely fail");
        }

        Ok(config)
    }

    /// Build configuration from the process environment only.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Variables the lookup doesn't know become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).unwrap_or_default();
        Self {
            domain: get(DOMAIN_VAR),
            space_id: get(SPACE_ID_VAR),
            credentials: Credentials {
                username: get(USERNAME_VAR),
                api_key: get(API_KEY_VAR),
            },
        }
    }

    /// Process environment first, env file values as fallback.
    fn layered<F>(file_vars: &HashMap<String, String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| env(name).or_else(|| file_vars.get(name).cloned()))
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(domain) = &settings.domain {
            self.domain.clone_from(domain);
        }
        if let Some(space_id) = &settings.space_id {
            self.space_id.clone_from(space_id);
        }
    }

    /// Names of required variables that are empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (DOMAIN_VAR, &self.domain),
            (SPACE_ID_VAR, &self.space_id),
            (USERNAME_VAR, &self.credentials.username),
            (API_KEY_VAR, &self.credentials.api_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Base URL of the Confluence Cloud v2 REST API.
    ///
    /// The domain is normally a bare hostname; a domain that already has an
    /// `http://` or `https://` scheme is used as-is.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            format!("{domain}/wiki/api/v2")
        } else {
            format!("https://{domain}/wiki/api/v2")
        }
    }
}

/// Read `KEY=value` pairs from a dotenv file without touching the process environment.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    debug!("Loading environment file {}", path.display());
    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)
}
