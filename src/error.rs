//! Error types for request dispatch

use thiserror::Error;

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Failures that abort a dispatch call.
///
/// These are contract violations on the caller side; anything an intent
/// handler gets wrong is recovered into the `NotHandled` response instead.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// `request.type` is none of the three lifecycle types
    #[error("unknown request type: {0}")]
    UnknownRequestType(String),

    /// An `AMAZON.*` intent the built-in group does not map
    #[error("built-in intents do not handle {0}")]
    UnknownBuiltIn(String),

    /// The built-in group is missing an entry the dispatcher relies on
    #[error("built-in intents must map {0}")]
    MissingBuiltIn(&'static str),

    /// A built-in handler itself failed
    #[error("built-in intent {name} failed: {source}")]
    BuiltIn {
        name: String,
        #[source]
        source: IntentError,
    },

    /// The request body does not fit the webhook schema
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

/// Failures raised by intent handlers while reading their slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    /// The slot is absent or carries no value
    #[error("missing slot: {0}")]
    MissingSlot(String),

    /// The slot value could not be interpreted
    #[error("invalid value for slot {slot}: {reason}")]
    InvalidSlot { slot: String, reason: String },
}
