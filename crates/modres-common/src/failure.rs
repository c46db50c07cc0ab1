//! Resolve failures.
//!
//! A `ResolveFailure` is the expected, data-carrying error of a resolution
//! step: the module was not found, the repository could not be reached, or
//! its metadata could not be read. It is cheap to clone so that a stored
//! failure can be handed out again every time a consumer asks for it.

use std::error::Error;
use std::fmt::Write;
use std::sync::Arc;

use crate::ModuleCoordinate;

/// The category of a resolve failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// No repository knows the module.
    NotFound,
    /// The repository could not be reached or returned an error.
    Transport,
    /// The repository answered, but its metadata could not be read.
    MalformedMetadata,
    /// Any other failure.
    Other,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NotFound => "not found",
            FailureKind::Transport => "transport",
            FailureKind::MalformedMetadata => "malformed metadata",
            FailureKind::Other => "other",
        }
    }
}

/// Why a module could not be resolved.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", render(.coordinate, .kind, .message, .attempted))]
pub struct ResolveFailure {
    coordinate: ModuleCoordinate,
    kind: FailureKind,
    message: String,
    attempted: Vec<String>,
    #[source]
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl ResolveFailure {
    fn new(coordinate: ModuleCoordinate, kind: FailureKind, message: String) -> Self {
        Self {
            coordinate,
            kind,
            message,
            attempted: Vec::new(),
            cause: None,
        }
    }

    /// No repository knows any version of the module.
    pub fn not_found(coordinate: ModuleCoordinate) -> Self {
        Self::new(coordinate, FailureKind::NotFound, String::new())
    }

    /// The repository could not be reached; `cause` is kept as the error source.
    pub fn transport<E>(coordinate: ModuleCoordinate, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let message = cause.to_string();
        Self::new(coordinate, FailureKind::Transport, message).with_cause(cause)
    }

    /// The repository metadata could not be parsed.
    pub fn malformed_metadata(coordinate: ModuleCoordinate, message: impl Into<String>) -> Self {
        Self::new(coordinate, FailureKind::MalformedMetadata, message.into())
    }

    pub fn other(coordinate: ModuleCoordinate, message: impl Into<String>) -> Self {
        Self::new(coordinate, FailureKind::Other, message.into())
    }

    /// Attaches the locations that were searched before giving up.
    pub fn with_attempted<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attempted.extend(locations.into_iter().map(Into::into));
        self
    }

    /// Attaches a root cause, replacing any previous one.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Returns the coordinate whose resolution failed.
    pub fn coordinate(&self) -> &ModuleCoordinate {
        &self.coordinate
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the locations searched before the failure, in search order.
    pub fn attempted(&self) -> &[String] {
        &self.attempted
    }

    /// Returns the shared root cause, if any.
    pub fn cause(&self) -> Option<&Arc<dyn Error + Send + Sync>> {
        self.cause.as_ref()
    }
}

fn render(
    coordinate: &ModuleCoordinate,
    kind: &FailureKind,
    message: &str,
    attempted: &[String],
) -> String {
    let mut out = match kind {
        FailureKind::NotFound => {
            format!("Could not find any version that matches {}.", coordinate)
        }
        FailureKind::Transport => {
            format!("Could not list versions for {}: {}", coordinate, message)
        }
        FailureKind::MalformedMetadata => {
            format!("Could not parse version metadata for {}: {}", coordinate, message)
        }
        FailureKind::Other => format!("Could not resolve {}: {}", coordinate, message),
    };

    if !attempted.is_empty() {
        out.push_str("\nSearched in the following locations:");
        for location in attempted {
            let _ = write!(out, "\n    {}", location);
        }
    }

    out
}
