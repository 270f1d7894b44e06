//! API key and investor id resolution
//!
//! Both values come from an environment variable first and fall back to the
//! TOML credentials file:
//!
//! ```toml
//! [access]
//! api_key = "..."
//!
//! [account]
//! investor_id = 12345
//! ```

use std::path::{Path, PathBuf};

use lendingclub_core::{Error, InvestorId, Result};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{config_parse_error, config_read_error};

/// Parsed credentials file
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsFile {
    #[serde(default)]
    pub access: AccessSection,
    #[serde(default)]
    pub account: AccountSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccessSection {
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountSection {
    pub investor_id: Option<InvestorIdValue>,
}

/// Investor id written either as an integer or a quoted string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InvestorIdValue {
    Number(InvestorId),
    Text(String),
}

impl InvestorIdValue {
    fn to_id(&self) -> Result<InvestorId> {
        match self {
            InvestorIdValue::Number(id) => Ok(*id),
            InvestorIdValue::Text(text) => parse_investor_id(text),
        }
    }
}

impl CredentialsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| config_read_error(e, path))?;
        toml::from_str(&content).map_err(|e| config_parse_error(e, path))
    }
}

fn parse_investor_id(text: &str) -> Result<InvestorId> {
    text.trim().parse().map_err(|_| {
        Error::config(format!("investor id '{}' is not a number", text))
            .with_hint("the investor id is the account number shown on the LendingClub website")
    })
}

/// Where the credentials of one client come from
#[derive(Debug, Clone)]
pub struct CredentialSource {
    api_key_env: String,
    investor_id_env: String,
    config_path: Option<PathBuf>,
}

impl CredentialSource {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_key_env: config.api_key_env.clone(),
            investor_id_env: config.investor_id_env.clone(),
            config_path: config.config_path.clone(),
        }
    }

    pub fn api_key(&self) -> Result<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    pub fn investor_id(&self) -> Result<InvestorId> {
        self.investor_id_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key with `lookup` standing in for the environment
    pub fn api_key_with<L>(&self, lookup: L) -> Result<String>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(&self.api_key_env).filter(|key| !key.is_empty()) {
            return Ok(key);
        }

        let file = self.load_file()?;
        file.access.api_key.ok_or_else(|| {
            Error::config("configuration file doesn't have info about api_key")
                .with_hint(format!(
                    "set {} or add api_key to the [access] table",
                    self.api_key_env
                ))
        })
    }

    /// Resolve the investor id with `lookup` standing in for the environment
    pub fn investor_id_with<L>(&self, lookup: L) -> Result<InvestorId>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(&self.investor_id_env).filter(|id| !id.is_empty()) {
            return parse_investor_id(&id);
        }

        let file = self.load_file()?;
        match file.account.investor_id {
            Some(value) => value.to_id(),
            None => Err(
                Error::config("configuration file doesn't have info about investor_id")
                    .with_hint(format!(
                        "set {} or add investor_id to the [account] table",
                        self.investor_id_env
                    )),
            ),
        }
    }

    fn load_file(&self) -> Result<CredentialsFile> {
        let path = self.config_path.as_deref().ok_or_else(|| {
            Error::config("no credentials file location is known")
                .with_hint("set HOME or LC_CONFIG_FILE, or use the environment variables")
        })?;
        CredentialsFile::load(path)
    }
}
