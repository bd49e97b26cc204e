//! VisionLens Error Types
//!
//! Centralized error handling for the client core and its front ends.

use thiserror::Error;

/// Central error type for VisionLens
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("No image selected")]
    NoImageSelected,

    #[error("Image error: {0}")]
    Image(String),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for VisionLens operations
pub type VisionResult<T> = Result<T, VisionError>;
