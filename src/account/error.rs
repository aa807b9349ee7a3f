//! Errors raised while turning commands into account transitions.

use thiserror::Error;

/// Errors that can occur when dispatching a command to the account machine.
///
/// `UnknownAction` is a caller defect, not a runtime condition: there is no
/// recovery path for a command the machine does not understand.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unknown action '{kind}'")]
    UnknownAction { kind: String },

    #[error("action '{kind}' requires an amount payload")]
    MissingPayload { kind: String },

    #[error("malformed command: {0}")]
    Json(#[from] serde_json::Error),
}
