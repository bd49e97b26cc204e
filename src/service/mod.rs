//! Remote vision service
//!
//! The captioning/OCR backend is an external HTTP service. Everything that
//! talks to it goes through the `VisionService` trait so the session can be
//! driven by a mock in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::VisionResult;
use crate::image::SelectedImage;
use crate::session::OperationKind;

pub mod http;
pub mod responses;

pub use http::HttpVisionService;

/// Trait for caption/text-extraction backends
#[async_trait]
pub trait VisionService: Send + Sync + std::fmt::Debug {
    /// Submit the image for one operation and return its result field.
    ///
    /// `Ok(None)` means the service answered without a result.
    async fn submit(
        &self,
        kind: OperationKind,
        image: &SelectedImage,
    ) -> VisionResult<Option<String>>;

    /// Check that the service is reachable
    async fn health_check(&self) -> bool;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Build the HTTP backend described by the config
pub fn create_service(config: &Config) -> VisionResult<Arc<dyn VisionService>> {
    config.validate()?;
    let service = HttpVisionService::new(config)?;
    info!(
        "🔌 Vision service at {} (timeout {}s)",
        service.base_url(),
        config.request_timeout_secs
    );
    Ok(Arc::new(service))
}
