//! State types for an analysis session
//!
//! Operation kinds and the per-operation lifecycle.

use std::fmt;

/// The two independent processing channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Caption,
    TextExtraction,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Caption, OperationKind::TextExtraction];

    /// Service path, relative to the base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            OperationKind::Caption => "caption/",
            OperationKind::TextExtraction => "extract-text-auto/",
        }
    }

    /// Shown when the service answers without a usable result
    pub fn fallback_text(self) -> &'static str {
        match self {
            OperationKind::Caption => "No caption found.",
            OperationKind::TextExtraction => "No text found.",
        }
    }

    /// Shown in place of any transport or service failure
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationKind::Caption => "Unable to generate caption. Please try another image.",
            OperationKind::TextExtraction => {
                "Unable to extract text. Ensure the image has clear text."
            }
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Caption => write!(f, "caption"),
            OperationKind::TextExtraction => write!(f, "text extraction"),
        }
    }
}

/// Lifecycle stage of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State of one channel. The result and the error message live in
/// different variants, so at most one of them is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl OperationState {
    pub fn phase(&self) -> Phase {
        match self {
            OperationState::Idle => Phase::Idle,
            OperationState::Pending => Phase::Pending,
            OperationState::Succeeded(_) => Phase::Succeeded,
            OperationState::Failed(_) => Phase::Failed,
        }
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            OperationState::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            OperationState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OperationState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = OperationState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_result_and_error_are_exclusive() {
        let ok = OperationState::Succeeded("a dog".to_string());
        assert_eq!(ok.result(), Some("a dog"));
        assert!(ok.error_message().is_none());

        let failed = OperationState::Failed("boom".to_string());
        assert_eq!(failed.error_message(), Some("boom"));
        assert!(failed.result().is_none());
    }

    #[test]
    fn test_kind_endpoints_and_messages() {
        assert_eq!(OperationKind::Caption.endpoint(), "caption/");
        assert_eq!(OperationKind::TextExtraction.endpoint(), "extract-text-auto/");
        assert_eq!(OperationKind::TextExtraction.fallback_text(), "No text found.");
        assert_eq!(
            OperationKind::Caption.failure_message(),
            "Unable to generate caption. Please try another image."
        );
        assert_eq!(OperationKind::TextExtraction.to_string(), "text extraction");
    }
}
