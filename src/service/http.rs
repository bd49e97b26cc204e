//! HTTP backend for the vision service
//!
//! Posts the image as multipart form data (one `file` field) and reads the
//! JSON answer.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, warn};

use super::responses::{AnalysisResponse, HealthResponse};
use super::VisionService;
use crate::config::Config;
use crate::error::{VisionError, VisionResult};
use crate::image::SelectedImage;
use crate::session::OperationKind;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// Talks to the service over HTTP with a shared client
#[derive(Debug, Clone)]
pub struct HttpVisionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVisionService {
    /// Create a new HTTP backend from config
    pub fn new(config: &Config) -> VisionResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.service_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, kind: OperationKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint())
    }

    fn form_for(image: &SelectedImage) -> VisionResult<Form> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())?;
        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl VisionService for HttpVisionService {
    async fn submit(
        &self,
        kind: OperationKind,
        image: &SelectedImage,
    ) -> VisionResult<Option<String>> {
        let url = self.endpoint_url(kind);
        debug!("🌐 POST {} ({} bytes)", url, image.len());

        let response = self
            .client
            .post(&url)
            .multipart(Self::form_for(image)?)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(VisionError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        debug!("🧠 Service raw body: {}", body_text);
        let body: AnalysisResponse = serde_json::from_str(&body_text)?;
        if let Some(error) = &body.error {
            warn!("⚠️ Service reported a {} error: {}", kind, error);
        }

        Ok(body.into_result(kind))
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/", self.base_url))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                if let Ok(health) = resp.json::<HealthResponse>().await {
                    debug!("💚 Service says: {}", health.message);
                }
                true
            }
            Ok(resp) => {
                warn!("❌ Health check returned {}", resp.status());
                false
            }
            Err(e) => {
                warn!("❌ Health check failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
