//! Error types for glosor-core.

use crate::types::Mode;
use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that make a deck unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("malformed source data{}: {reason}", describe_location(*index, field))]
    MalformedSourceData {
        index: Option<usize>,
        field: Option<&'static str>,
        reason: String,
    },

    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
}

impl LoadError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSourceData {
            index: None,
            field: None,
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_field(index: usize, field: &'static str, reason: &str) -> Self {
        Self::MalformedSourceData {
            index: Some(index),
            field: Some(field),
            reason: reason.to_string(),
        }
    }
}

fn describe_location(index: Option<usize>, field: &Option<&'static str>) -> String {
    match (index, field) {
        (Some(index), Some(field)) => format!(" in record {} field `{}`", index, field),
        (Some(index), None) => format!(" in record {}", index),
        _ => String::new(),
    }
}

/// Errors from session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("{mode} deck unavailable: {reason}")]
    DeckUnavailable { mode: Mode, reason: String },
}
