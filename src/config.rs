use crate::error::{VisionError, VisionResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured service URL
pub const SERVICE_URL_ENV: &str = "VISIONLENS_SERVICE_URL";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Remote service
    pub service_url: String,
    pub request_timeout_secs: u64,

    // Meta
    pub log_level: String,
    pub dark_mode: bool,

    /// On-disk `service_url` while a runtime override is in effect
    #[serde(skip)]
    saved_service_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
            log_level: "INFO".to_string(),
            dark_mode: false,
            saved_service_url: None,
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> VisionResult<Self> {
        let mut config = Self::load_from(&config_path())?;
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            if !url.trim().is_empty() {
                config.override_service_url(url.trim());
            }
        }
        Ok(config)
    }

    /// Point this run at another service without changing the saved URL
    pub fn override_service_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.saved_service_url.is_none() {
            self.saved_service_url = Some(std::mem::replace(&mut self.service_url, url));
        } else {
            self.service_url = url;
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> VisionResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> VisionResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> VisionResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = match &self.saved_service_url {
            Some(saved) => serde_json::to_string_pretty(&Self {
                service_url: saved.clone(),
                ..self.clone()
            })?,
            None => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the HTTP client cannot work with
    pub fn validate(&self) -> VisionResult<()> {
        let url = reqwest::Url::parse(&self.service_url).map_err(|e| {
            VisionError::Config(format!("invalid service_url '{}': {}", self.service_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VisionError::Config(format!(
                "service_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(VisionError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub fn log_directive(&self) -> String {
        self.log_level.trim().to_lowercase()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("visionlens")
        .join("config.json")
}
