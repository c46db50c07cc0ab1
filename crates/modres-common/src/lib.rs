//! Shared resolution vocabulary.
//!
//! Types used by both sides of a repository listing: the producers that talk
//! to repositories and the resolver code that consumes their results.
//!
//! - **Module coordinates**: `group:name` identifiers of dependencies
//! - **Resolve failures**: structured, cloneable descriptions of why a
//!   resolution step could not complete
//! - **Attempted resources**: the locations consulted during an attempt,
//!   kept for diagnostics

mod attempts;
mod coordinate;
mod failure;

pub use attempts::{ResolveResult, ResourceAttempts, ResourceAwareResolveResult};
pub use coordinate::{CoordinateError, ModuleCoordinate};
pub use failure::{FailureKind, ResolveFailure};
