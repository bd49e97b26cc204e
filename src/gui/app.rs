//! Main application state for VisionLens GUI
//!
//! Contains the VisionLensApp struct and initialization logic.

use iced::widget::image;
use iced::Task;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::service::{create_service, VisionService};
use crate::session::Session;

use super::messages::Message;

/// Main application state
pub struct VisionLensApp {
    /// Selected image and both operation channels
    pub(crate) session: Session,
    /// Backend, absent when the config could not produce one
    pub(crate) service: Option<Arc<dyn VisionService>>,
    /// Preview of the selected image
    pub(crate) preview: Option<image::Handle>,
    /// Inline notice (e.g. nothing selected yet)
    pub(crate) notice: Option<String>,
    /// Configuration
    pub(crate) config: Config,
    /// Service health status (None = not checked, Some(true) = healthy, Some(false) = failed)
    pub(crate) service_status: Option<bool>,
}

impl VisionLensApp {
    /// Create a new VisionLensApp instance
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("⚠️ Could not load config, using defaults: {}", e);
            Config::default()
        });
        let app = Self::with_service(config.clone(), create_service(&config).ok());

        if app.service.is_none() {
            warn!("⚠️ No vision service for '{}'", config.service_url);
            return (app, Task::none());
        }

        info!("🚀 VisionLens app initialized");
        (app, Task::done(Message::HealthCheck))
    }

    /// Build the app around an explicit backend
    pub fn with_service(config: Config, service: Option<Arc<dyn VisionService>>) -> Self {
        Self {
            session: Session::new(),
            service,
            preview: None,
            notice: None,
            config,
            service_status: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Application title
    pub fn title(&self) -> String {
        "VisionLens - Image Captioning & Text Extraction".to_string()
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        if self.config.dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
