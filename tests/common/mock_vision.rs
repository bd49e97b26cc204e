//! Mock vision service for testing
//!
//! Records every submission and answers with canned replies.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use visionlens::error::{VisionError, VisionResult};
use visionlens::image::SelectedImage;
use visionlens::service::VisionService;
use visionlens::session::OperationKind;

/// One recorded submission
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub kind: OperationKind,
    pub file_name: String,
    pub len: usize,
}

/// Canned answer for one operation kind
#[derive(Debug, Clone)]
pub enum Reply {
    Result(Option<String>),
    Status(u16),
}

/// Mock service that records calls and replays configured answers
#[derive(Debug)]
pub struct MockVision {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<HashMap<OperationKind, Reply>>,
    delays: Mutex<HashMap<OperationKind, Duration>>,
}

impl MockVision {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
        }
    }

    pub fn reply(&self, kind: OperationKind, reply: Reply) {
        self.replies.lock().unwrap().insert(kind, reply);
    }

    pub fn delay(&self, kind: OperationKind, delay: Duration) {
        self.delays.lock().unwrap().insert(kind, delay);
    }

    /// Get all recorded submissions
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, kind: OperationKind) -> usize {
        self.calls().iter().filter(|c| c.kind == kind).count()
    }
}

impl Default for MockVision {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionService for MockVision {
    async fn submit(
        &self,
        kind: OperationKind,
        image: &SelectedImage,
    ) -> VisionResult<Option<String>> {
        self.calls.lock().unwrap().push(Call {
            kind,
            file_name: image.file_name().to_string(),
            len: image.len(),
        });

        let delay = self.delays.lock().unwrap().get(&kind).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().get(&kind).cloned();
        match reply {
            Some(Reply::Result(text)) => Ok(text),
            Some(Reply::Status(status)) => Err(VisionError::Status {
                status,
                body: "mock failure".to_string(),
            }),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "mock"
    }
}
