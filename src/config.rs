use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::summary::DEFAULT_MODEL;
use crate::error::{AppError, AppResult};

const APP_DIR_NAME: &str = "vibe-commit";
const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: SummarizerProvider,
    pub model: String,
    pub endpoint: String,
    pub command: Option<String>,
    pub hf_token: Option<String>,
    pub workspace_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizerProvider {
    HuggingFace,
    Command,
    Custom(String),
}

impl SummarizerProvider {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "huggingface" | "hf" => SummarizerProvider::HuggingFace,
            "command" => SummarizerProvider::Command,
            other => SummarizerProvider::Custom(other.to_string()),
        }
    }
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Ok(Self::resolve(stored, workspace_hint, |key| env::var(key).ok()))
    }

    /// Layers environment overrides on top of the stored file.
    pub fn resolve<F>(stored: StoredConfig, workspace_hint: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: Option<String>| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .or(fallback.filter(|value| !value.trim().is_empty()))
        };

        let provider = pick("VIBE_COMMIT_PROVIDER", stored.provider)
            .map(|value| SummarizerProvider::parse(&value))
            .unwrap_or(SummarizerProvider::HuggingFace);

        Self {
            provider,
            model: pick("VIBE_COMMIT_MODEL", stored.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: pick("VIBE_COMMIT_ENDPOINT", stored.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            command: pick("VIBE_COMMIT_COMMAND", stored.command),
            hf_token: pick("HF_TOKEN", stored.hf_token),
            workspace_root: workspace_hint.to_path_buf(),
        }
    }
}

/// On-disk settings edited by `vibe-commit config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_token: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("unable to determine the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}
