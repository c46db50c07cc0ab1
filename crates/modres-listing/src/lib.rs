//! Module version listing results.
//!
//! When a resolver asks a repository which versions exist for a module, the
//! answer travels back in a [`ListingResolveResult`]:
//!
//! - **Producer side**: a [`VersionLister`] records exactly one outcome,
//!   either the [`VersionListing`] it found or a [`ResolveFailure`]
//! - **Consumer side**: version selection reads the state, the versions, or
//!   the failure any number of times afterwards
//!
//! # Example
//!
//! ```
//! use modres_listing::{ListingResolveResult, ListingState};
//!
//! let mut result = ListingResolveResult::new();
//! result.listed_versions(["1.0", "1.1", "2.0"])?;
//!
//! assert_eq!(result.state(), ListingState::Listed);
//! assert!(result.versions()?.contains("1.1"));
//! # Ok::<(), modres_listing::ListingError>(())
//! ```
//!
//! [`ResolveFailure`]: modres_common::ResolveFailure

mod error;
mod lister;
mod result;
mod version_listing;

pub use error::{ListingError, ProtocolViolation};
pub use lister::{list_module_versions, VersionLister};
pub use result::{ListingResolveResult, ListingState};
pub use version_listing::VersionListing;
