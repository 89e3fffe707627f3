use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::ConfigError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct CredentialFile {
    #[serde(default)]
    api_key: Option<String>,
}

/// The single API key persisted in the user's home directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns `None` when no key has been saved yet. A missing, null or empty
    /// `apiKey` counts as not saved; content that is not a JSON object is a
    /// parse error.
    pub fn load(&self) -> Result<Option<String>, ConfigError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file present");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let parsed = parse_credential_file(&raw).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "read config file");

        Ok(parsed.api_key.filter(|key| !key.is_empty()))
    }

    pub fn save(&self, key: &str) -> Result<(), ConfigError> {
        let body = serde_json::to_string_pretty(&CredentialFile {
            api_key: Some(key.to_string()),
        })
        .map_err(ConfigError::Encode)?;

        fs::write(&self.path, body).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "saved api key");
        Ok(())
    }
}

fn parse_credential_file(raw: &str) -> Result<CredentialFile, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}
