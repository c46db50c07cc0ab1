//! The producer side of a listing.
//!
//! Repository implementations (remote, local directory, cache) implement
//! [`VersionLister`]; the resolver drives them through
//! [`list_module_versions`].

use modres_common::{ModuleCoordinate, ResourceAwareResolveResult};

use crate::{ListingResolveResult, ListingState};

/// A repository source that can enumerate the versions of a module.
pub trait VersionLister: Send + Sync {
    /// A short name for diagnostics (e.g., "maven-central", "local-cache").
    fn name(&self) -> &str;

    /// Lists the versions of `coordinate` into `result`.
    ///
    /// Implementations record exactly one outcome with `listed`,
    /// `listed_versions` or `failed`, and may record the locations they
    /// consulted and whether they are authoritative.
    fn list_versions(&self, coordinate: &ModuleCoordinate, result: &mut ListingResolveResult);
}

/// Asks `lister` for the versions of `coordinate` and returns the populated result.
///
/// If the lister records no outcome (for instance because it was cancelled),
/// the result is returned in the `Unknown` state and should be discarded.
pub fn list_module_versions(
    lister: &dyn VersionLister,
    coordinate: &ModuleCoordinate,
) -> ListingResolveResult {
    let mut result = ListingResolveResult::new();
    lister.list_versions(coordinate, &mut result);

    match result.state() {
        ListingState::Unknown => tracing::warn!(
            lister = lister.name(),
            coordinate = %coordinate,
            "lister recorded no outcome"
        ),
        state => tracing::debug!(
            lister = lister.name(),
            coordinate = %coordinate,
            ?state,
            authoritative = result.is_authoritative(),
            attempted = result.attempted_locations().len(),
            "listed module versions"
        ),
    }

    result
}
