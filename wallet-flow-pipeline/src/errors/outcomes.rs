//! Error types for the outcome-classifier stage of the wallet-flow
//! pipeline. Precondition violations are reported here so callers are
//! forced to guard on wallet-action state before selecting a result.
use super::DecodeError;
use thiserror::Error;

/// Represents errors that can occur while classifying an action's outcome.
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// The wallet action has not completed successfully yet.
    #[error("wallet action has not completed successfully")]
    NotSuccess,
    /// The wallet action carries no request metadata.
    #[error("wallet action carries no metadata")]
    MissingMetadata,
    /// The wallet action's metadata belongs to a different action kind.
    #[error("wallet action is not a {expected} action")]
    UnexpectedAction { expected: &'static str },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
