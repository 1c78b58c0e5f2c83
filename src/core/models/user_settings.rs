use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::models::UploadKind;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

/// Where the backend lives and how its endpoints are named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub api_base_url: String,
    pub search_path: String,
    pub search_query_param: String,
    pub meme_upload_path: String,
    pub meme_field_name: String,
    pub dataset_upload_path: String,
    pub dataset_field_name: String,
    pub request_timeout_secs: u64,
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: global_constants::DEFAULT_API_BASE_URL.to_string(),
            search_path: global_constants::DEFAULT_SEARCH_PATH.to_string(),
            search_query_param: global_constants::DEFAULT_SEARCH_QUERY_PARAM.to_string(),
            meme_upload_path: global_constants::DEFAULT_MEME_UPLOAD_PATH.to_string(),
            meme_field_name: global_constants::DEFAULT_MEME_FIELD_NAME.to_string(),
            dataset_upload_path: global_constants::DEFAULT_DATASET_UPLOAD_PATH.to_string(),
            dataset_field_name: global_constants::DEFAULT_DATASET_FIELD_NAME.to_string(),
            request_timeout_secs: global_constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn search_url(&self) -> String {
        self.endpoint_url(&self.search_path)
    }

    pub fn upload_url(&self, kind: UploadKind) -> String {
        match kind {
            UploadKind::Meme => self.endpoint_url(&self.meme_upload_path),
            UploadKind::Dataset => self.endpoint_url(&self.dataset_upload_path),
        }
    }

    pub fn upload_field_name(&self, kind: UploadKind) -> &str {
        match kind {
            UploadKind::Meme => &self.meme_field_name,
            UploadKind::Dataset => &self.dataset_field_name,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn endpoint_url(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
