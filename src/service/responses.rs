//! JSON bodies returned by the vision service

use serde::Deserialize;

use crate::session::OperationKind;

/// Body of `POST /caption/` and `POST /extract-text-auto/`.
///
/// The service reports its own failures as a 200 with only `error` set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub caption: Option<String>,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// The result field belonging to `kind`
    pub fn into_result(self, kind: OperationKind) -> Option<String> {
        match kind {
            OperationKind::Caption => self.caption,
            OperationKind::TextExtraction => self.text,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
