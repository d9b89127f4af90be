//! Physitrack credentials and their resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{api, credentials};
use crate::error::{PhysitrackError, Result};

/// API key and account subdomain, validated once and never mutated
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    subdomain: String,
}

impl Credentials {
    /// Fails with [`PhysitrackError::Config`] if either value is blank
    pub fn new(api_key: impl Into<String>, subdomain: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let subdomain = subdomain.into();

        if api_key.trim().is_empty() {
            return Err(PhysitrackError::Config(
                "You must provide a Physitrack API key".to_string(),
            ));
        }
        if subdomain.trim().is_empty() {
            return Err(PhysitrackError::Config(
                "You must provide a Physitrack subdomain".to_string(),
            ));
        }

        Ok(Self { api_key, subdomain })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// `https://{subdomain}.physitrack.com/api/v2/`
    pub fn base_url(&self) -> String {
        format!(
            "https://{}.{}{}/",
            self.subdomain,
            api::SERVICE_DOMAIN,
            api::BASE_PATH
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

/// Credentials file structure
#[derive(Deserialize, Debug, Default)]
struct CredentialsFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    subdomain: Option<String>,
}

/// Credentials resolution with fallback logic
pub struct CredentialsResolver {
    file_path: Option<PathBuf>,
}

impl Default for CredentialsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsResolver {
    /// Resolver using the default credentials file (~/.physitrack/credentials.json)
    pub fn new() -> Self {
        Self {
            file_path: dirs::home_dir().map(|p| p.join(credentials::FILE_PATH)),
        }
    }

    /// Resolver reading an explicit credentials file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
        }
    }

    /// Resolve each value from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (PHYSITRACK_API_KEY, PHYSITRACK_SUBDOMAIN)
    /// 3. Credentials file
    pub fn resolve(
        &self,
        cli_api_key: Option<&str>,
        cli_subdomain: Option<&str>,
    ) -> Result<Credentials> {
        let mut file: Option<CredentialsFile> = None;

        let api_key = match Self::from_cli_or_env(cli_api_key, credentials::API_KEY_ENV_VAR) {
            Some(key) => Some(key),
            None => self.load_file(&mut file)?.api_key.clone(),
        };
        let subdomain = match Self::from_cli_or_env(cli_subdomain, credentials::SUBDOMAIN_ENV_VAR)
        {
            Some(subdomain) => Some(subdomain),
            None => self.load_file(&mut file)?.subdomain.clone(),
        };

        match (api_key, subdomain) {
            (Some(api_key), Some(subdomain)) => Credentials::new(api_key, subdomain),
            _ => Err(PhysitrackError::Config(self.not_found_message())),
        }
    }

    fn from_cli_or_env(cli_value: Option<&str>, env_var: &str) -> Option<String> {
        if let Some(value) = cli_value {
            debug!("Using {} from CLI argument", env_var);
            return Some(value.to_string());
        }
        match std::env::var(env_var) {
            Ok(value) => {
                debug!("Using {} environment variable", env_var);
                Some(value)
            }
            Err(_) => None,
        }
    }

    /// Read the credentials file once; a missing file counts as empty
    fn load_file<'a>(&self, cache: &'a mut Option<CredentialsFile>) -> Result<&'a CredentialsFile> {
        if cache.is_none() {
            let parsed = match &self.file_path {
                Some(path) if path.exists() => Self::read_file(path)?,
                Some(path) => {
                    debug!("No credentials file at {}", path.display());
                    CredentialsFile::default()
                }
                None => CredentialsFile::default(),
            };
            *cache = Some(parsed);
        }
        Ok(cache.get_or_insert_with(CredentialsFile::default))
    }

    fn read_file(path: &Path) -> Result<CredentialsFile> {
        debug!("Reading credentials file {}", path.display());
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            PhysitrackError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate helpful error message when credentials are not found
    fn not_found_message(&self) -> String {
        let file_info = self
            .file_path
            .as_ref()
            .map(|p| format!(", credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No Physitrack credentials found. Please provide both an API key and a subdomain using one of:\n\
             \n\
             1. CLI arguments:     physitrack --api-key <KEY> --subdomain <SUBDOMAIN>\n\
             2. Environment vars:  export {}=<KEY> {}=<SUBDOMAIN>\n\
             3. Credentials file:  {{\"api_key\": \"...\", \"subdomain\": \"...\"}}\n\
             \n\
             Checked: CLI arguments, env vars{}",
            credentials::API_KEY_ENV_VAR,
            credentials::SUBDOMAIN_ENV_VAR,
            file_info
        )
    }
}
