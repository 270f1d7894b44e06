//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.lendingclub.com";
pub const DEFAULT_API_VERSION: &str = "v1";
/// Value of the `X-LC-LISTING-VERSION` header sent with listing searches
pub const DEFAULT_LISTING_VERSION: &str = "1.3";
pub const DEFAULT_REQUEST_LIMIT_PER_SEC: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_ENV: &str = "LC_API_KEY";
pub const INVESTOR_ID_ENV: &str = "LC_INVESTOR_ID";
/// Overrides the location of the credentials file
pub const CONFIG_FILE_ENV: &str = "LC_CONFIG_FILE";
/// Credentials file name, looked up in the home directory
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".lendingclub.toml";

/// Settings of one [`crate::LendingClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_version: String,
    pub listing_version: String,
    /// Maximum outbound requests per second; 0 disables spacing
    pub rate_limit_per_sec: u32,
    pub timeout: Duration,
    /// Credentials file, `None` when no home directory is known
    pub config_path: Option<PathBuf>,
    pub api_key_env: String,
    pub investor_id_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            listing_version: DEFAULT_LISTING_VERSION.to_string(),
            rate_limit_per_sec: DEFAULT_REQUEST_LIMIT_PER_SEC,
            timeout: DEFAULT_TIMEOUT,
            config_path: default_config_path(),
            api_key_env: API_KEY_ENV.to_string(),
            investor_id_env: INVESTOR_ID_ENV.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the credentials file taken from `LC_CONFIG_FILE` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(CONFIG_FILE_ENV) {
            config.config_path = Some(PathBuf::from(path));
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_rate_limit(mut self, per_sec: u32) -> Self {
        self.rate_limit_per_sec = per_sec;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE_NAME))
}
