//! Message types for the VisionLens GUI
//!
//! All messages that can be sent to update the application state.

use crate::image::SelectedImage;
use crate::session::{OperationKind, Settlement};

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    // Selection
    PickImage,
    ImagePicked(Option<SelectedImage>),

    // Operations
    Dispatch(OperationKind),
    Settled(Settlement),

    // Service
    HealthCheck,
    HealthResponse(bool),

    // App Controls
    ToggleTheme,
}
