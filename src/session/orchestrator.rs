//! Request orchestration
//!
//! `dispatch` moves a channel to Pending and hands back everything needed to
//! run the request, `perform` runs it against a `VisionService`, and `settle`
//! writes the outcome back. Each dispatch gets a fresh ticket; a settlement
//! is applied only if its ticket is still the channel's latest.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::state::{OperationKind, OperationState};
use super::Session;
use crate::error::{VisionError, VisionResult};
use crate::image::SelectedImage;
use crate::service::VisionService;

/// Per-channel sequence number identifying one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A request that has been started but not yet sent
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub kind: OperationKind,
    pub ticket: Ticket,
    pub image: SelectedImage,
}

/// What came back from the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The service answered; the result field may be absent or empty
    Completed(Option<String>),
    /// Transport or service failure, kept for diagnostics only
    Failed(String),
}

/// A finished request, ready to be written back into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub kind: OperationKind,
    pub ticket: Ticket,
    pub outcome: Outcome,
}

impl Session {
    /// Start an operation on the current image.
    ///
    /// Fails with `NoImageSelected` without touching any state when no image
    /// has been chosen. Dispatching while the channel is already Pending
    /// supersedes the earlier request.
    pub fn dispatch(&mut self, kind: OperationKind) -> VisionResult<Dispatch> {
        let image = match &self.image {
            Some(image) => image.clone(),
            None => {
                debug!("🚫 {} requested with no image selected", kind);
                return Err(VisionError::NoImageSelected);
            }
        };

        let channel = self.channel_mut(kind);
        if channel.state.is_pending() {
            debug!("🔁 Superseding in-flight {} request", kind);
        }
        channel.latest += 1;
        channel.state = OperationState::Pending;

        let ticket = Ticket(channel.latest);
        info!("📤 Dispatching {} for {} ({:?})", kind, image.file_name(), ticket);
        Ok(Dispatch {
            kind,
            ticket,
            image,
        })
    }

    /// Apply a settlement. Returns false when it was stale and got dropped.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        let Settlement {
            kind,
            ticket,
            outcome,
        } = settlement;

        let channel = self.channel_mut(kind);
        if ticket != Ticket(channel.latest) || !channel.state.is_pending() {
            debug!(
                "🗑️ Discarding stale {} settlement ({:?}, latest is {})",
                kind, ticket, channel.latest
            );
            return false;
        }

        channel.state = match outcome {
            Outcome::Completed(Some(text)) if !text.is_empty() => OperationState::Succeeded(text),
            Outcome::Completed(_) => OperationState::Succeeded(kind.fallback_text().to_string()),
            Outcome::Failed(_) => OperationState::Failed(kind.failure_message().to_string()),
        };
        info!("📥 {} settled as {:?}", kind, channel.state.phase());
        true
    }
}

/// Run a dispatched request against the service. Always resolves.
pub async fn perform(service: Arc<dyn VisionService>, dispatch: Dispatch) -> Settlement {
    let Dispatch {
        kind,
        ticket,
        image,
    } = dispatch;

    let outcome = match service.submit(kind, &image).await {
        Ok(text) => Outcome::Completed(text),
        Err(e) => {
            warn!("❌ {} request to {} failed: {}", kind, service.name(), e);
            Outcome::Failed(e.to_string())
        }
    };

    Settlement {
        kind,
        ticket,
        outcome,
    }
}
