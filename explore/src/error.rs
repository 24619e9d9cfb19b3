//! Error types for building and querying the location graph.

use explore_host::ActionError;
use thiserror::Error;

/// Errors raised while declaring or mutating locations, regions and edges.
///
/// Every error is raised at the call that broke the contract, before anything
/// is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    /// A required argument was absent.
    #[error("expected {param} not to be null")]
    MissingArgument { param: &'static str },

    /// An argument could not be used as the expected kind of value.
    #[error("expected {param} to be {expected}{}", received(.actual))]
    InvalidArgument {
        param: &'static str,
        expected: &'static str,
        actual: Option<String>,
    },

    /// Two mutually exclusive arguments were given together.
    #[error("expected value or block, but not both (for {param})")]
    ConflictingArguments { param: &'static str },

    /// A keyed entry is already registered.
    #[error("{kind} {key} already exists")]
    AlreadyExists { kind: &'static str, key: String },

    #[error(transparent)]
    Action(#[from] ActionError),
}

fn received(actual: &Option<String>) -> String {
    actual
        .as_ref()
        .map(|actual| format!(", received {actual}"))
        .unwrap_or_default()
}

impl ExploreError {
    /// Creates a missing argument error.
    pub fn missing(param: &'static str) -> Self {
        Self::MissingArgument { param }
    }

    /// Creates an invalid argument error with the received value.
    pub fn invalid(param: &'static str, expected: &'static str, actual: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            expected,
            actual: Some(actual.into()),
        }
    }

    /// Creates an already-exists error.
    pub fn already_exists(kind: &'static str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind,
            key: key.into(),
        }
    }

    /// Check if this belongs to the invalid-argument family: missing,
    /// malformed, or conflicting arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. }
                | Self::InvalidArgument { .. }
                | Self::ConflictingArguments { .. }
        )
    }

    /// Name of the offending parameter, when there is one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::MissingArgument { param }
            | Self::InvalidArgument { param, .. }
            | Self::ConflictingArguments { param } => Some(param),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ExploreError> = std::result::Result<T, E>;
