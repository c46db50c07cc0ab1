//! Errors raised by listing results.

use modres_common::ResolveFailure;

use crate::ListingState;

/// Misuse of a listing result by the code driving it.
///
/// These are bugs in the calling resolver, never expected outcomes of a
/// listing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    /// A producer tried to record a second outcome.
    #[error("cannot mark listing as {attempted:?}: it is already {current:?}")]
    AlreadyCompleted {
        attempted: ListingState,
        current: ListingState,
    },
    /// The versions were requested before any outcome was recorded.
    #[error("no result has been specified for this listing")]
    NoResult,
}

/// Error returned when asking a listing result for its versions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ListingError {
    /// The listing attempt failed; carries the stored failure.
    #[error(transparent)]
    Failed(#[from] ResolveFailure),
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
}

impl ListingError {
    /// Returns the resolve failure, if this is not a protocol violation.
    pub fn as_failure(&self) -> Option<&ResolveFailure> {
        match self {
            ListingError::Failed(failure) => Some(failure),
            ListingError::Protocol(_) => None,
        }
    }

    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, ListingError::Protocol(_))
    }
}
