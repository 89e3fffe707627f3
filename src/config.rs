use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
const CONFIG_FILE_NAME: &str = ".ai-cli-tool-config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub credential_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::from_env_with(dirs.home_dir(), |key| {
            env::var(key).ok()
        }))
    }

    fn from_env_with(home_dir: &Path, mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: parse_api_base_url(get_var("AI_CLI_TOOL_API_BASE_URL").as_deref()),
            credential_path: credential_path(home_dir),
        }
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url)
    }
}

pub fn credential_path(home_dir: &Path) -> PathBuf {
    home_dir.join(CONFIG_FILE_NAME)
}

fn parse_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
