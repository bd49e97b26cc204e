//! Analysis session
//!
//! Holds the selected image and the state of both operation channels.
//! All mutation goes through `select_image`, `dispatch` and `settle`, so a
//! session can be driven and inspected without any UI.

use tracing::{debug, info};

use crate::image::SelectedImage;

pub mod orchestrator;
pub mod state;

pub use orchestrator::{perform, Dispatch, Outcome, Settlement, Ticket};
pub use state::{OperationKind, OperationState, Phase};

/// Notice shown when an operation is requested before any image is chosen
pub const NO_IMAGE_NOTICE: &str = "Please select an image first!";

/// One operation channel: its visible state plus the latest issued ticket
#[derive(Debug, Default)]
struct Channel {
    state: OperationState,
    latest: u64,
}

impl Channel {
    /// Invalidate whatever is in flight and return to Idle
    fn reset(&mut self) {
        self.latest += 1;
        self.state = OperationState::Idle;
    }
}

/// Session state shared by the selection and request handling code
#[derive(Debug, Default)]
pub struct Session {
    image: Option<SelectedImage>,
    caption: Channel,
    text: Channel,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected image, if any
    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn state(&self, kind: OperationKind) -> &OperationState {
        &self.channel(kind).state
    }

    pub fn is_pending(&self, kind: OperationKind) -> bool {
        self.state(kind).is_pending()
    }

    /// True while either channel is waiting on the service
    pub fn any_pending(&self) -> bool {
        OperationKind::ALL.iter().any(|&k| self.is_pending(k))
    }

    /// Replace the selected image and reset both channels to Idle.
    ///
    /// Requests already in flight keep running, but their tickets are
    /// invalidated here so their settlements will be ignored.
    pub fn select_image(&mut self, image: SelectedImage) {
        info!("🖼️ Image selected: {} ({} bytes)", image.file_name(), image.len());
        self.image = Some(image);

        for kind in OperationKind::ALL {
            let channel = self.channel_mut(kind);
            if channel.state.is_pending() {
                debug!("🗑️ Abandoning in-flight {} request", kind);
            }
            channel.reset();
        }
    }

    fn channel(&self, kind: OperationKind) -> &Channel {
        match kind {
            OperationKind::Caption => &self.caption,
            OperationKind::TextExtraction => &self.text,
        }
    }

    fn channel_mut(&mut self, kind: OperationKind) -> &mut Channel {
        match kind {
            OperationKind::Caption => &mut self.caption,
            OperationKind::TextExtraction => &mut self.text,
        }
    }
}
