use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HarvestError, HarvestResult};

pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com";

const TOKEN_ENV: &str = "HARVEST_ACCESS_TOKEN";
const ACCOUNT_ENV: &str = "HARVEST_ACCOUNT_ID";
const BASE_URL_ENV: &str = "HARVEST_BASE_URL";
const CREDENTIALS_FILE: &str = ".harvest-timesheets.json";

/// Personal access token and account id used to authenticate every request.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub personal_access_token: String,
    pub account_id: String,
}

impl Credentials {
    pub fn new(personal_access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            personal_access_token: personal_access_token.into(),
            account_id: account_id.into(),
        }
    }

    fn validate(self) -> HarvestResult<Self> {
        if self.personal_access_token.trim().is_empty() {
            return Err(HarvestError::Configuration(
                "personal access token is empty".to_string(),
            ));
        }
        if self.account_id.trim().is_empty() {
            return Err(HarvestError::Configuration("account id is empty".to_string()));
        }
        Ok(Self {
            personal_access_token: self.personal_access_token.trim().to_string(),
            account_id: self.account_id.trim().to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("personal_access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Loads credentials from the environment, falling back to
/// `~/.harvest-timesheets.json`.
pub fn load_credentials() -> HarvestResult<Credentials> {
    let path = credentials_path();
    credentials_from(env::var(TOKEN_ENV).ok(), env::var(ACCOUNT_ENV).ok(), path.as_deref())
}

/// Environment values win over the file; setting only one of them is an error
/// rather than a silent fallback.
pub fn credentials_from(
    token: Option<String>,
    account_id: Option<String>,
    file: Option<&Path>,
) -> HarvestResult<Credentials> {
    match (token, account_id) {
        (Some(token), Some(account_id)) => Credentials::new(token, account_id).validate(),
        (Some(_), None) => Err(HarvestError::Configuration(format!(
            "{TOKEN_ENV} is set but {ACCOUNT_ENV} is not"
        ))),
        (None, Some(_)) => Err(HarvestError::Configuration(format!(
            "{ACCOUNT_ENV} is set but {TOKEN_ENV} is not"
        ))),
        (None, None) => {
            let path = file.ok_or_else(|| {
                HarvestError::Configuration("Home directory not found".to_string())
            })?;
            load_credentials_from(path)
        }
    }
}

pub fn load_credentials_from(path: &Path) -> HarvestResult<Credentials> {
    let contents = fs::read_to_string(path).map_err(|err| {
        HarvestError::Configuration(format!(
            "Unable to read credentials from {}: {err}",
            path.display()
        ))
    })?;
    let credentials: Credentials = serde_json::from_str(&contents).map_err(|err| {
        HarvestError::Configuration(format!(
            "Unable to parse credentials in {}: {err}",
            path.display()
        ))
    })?;
    credentials.validate()
}

pub fn credentials_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(CREDENTIALS_FILE);
    Some(path)
}

/// Where requests go and how the client identifies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(value) = env::var(BASE_URL_ENV) {
            if !value.trim().is_empty() {
                settings.base_url = value.trim().trim_end_matches('/').to_string();
            }
        }
        settings
    }
}

pub fn default_user_agent() -> String {
    format!("timesheets ({})", env!("CARGO_PKG_VERSION"))
}
