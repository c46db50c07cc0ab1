//! End-to-end listing flows through the producer seam.
//!
//! In-memory listers stand in for remote and local repositories; the helpers
//! below play the part of the resolver consuming their results.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::thread;

use modres_common::{FailureKind, ModuleCoordinate, ResolveFailure, ResourceAwareResolveResult};
use modres_listing::{
    list_module_versions, ListingError, ListingResolveResult, ListingState, VersionLister,
    VersionListing,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A repository backed by a map of `group:name` to versions.
struct MemoryRepository {
    name: &'static str,
    base: &'static str,
    modules: HashMap<String, Vec<&'static str>>,
    authoritative: bool,
}

impl MemoryRepository {
    fn new(name: &'static str, base: &'static str) -> Self {
        Self {
            name,
            base,
            modules: HashMap::new(),
            authoritative: true,
        }
    }

    fn with_module(mut self, coordinate: &str, versions: &[&'static str]) -> Self {
        self.modules.insert(coordinate.to_string(), versions.to_vec());
        self
    }

    fn partial(mut self) -> Self {
        self.authoritative = false;
        self
    }
}

impl VersionLister for MemoryRepository {
    fn name(&self) -> &str {
        self.name
    }

    fn list_versions(&self, coordinate: &ModuleCoordinate, result: &mut ListingResolveResult) {
        let location = format!("{}/{}/{}/", self.base, coordinate.group, coordinate.name);
        result.attempted(location.clone());
        result.set_authoritative(self.authoritative);

        let outcome = match self.modules.get(&coordinate.to_string()) {
            Some(versions) => result.listed_versions(versions.iter().copied()),
            None => result.failed(
                ResolveFailure::not_found(coordinate.clone()).with_attempted([location]),
            ),
        };
        outcome.expect("fresh result accepts one outcome");
    }
}

/// A repository that cannot be reached.
struct Offline;

impl VersionLister for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn list_versions(&self, coordinate: &ModuleCoordinate, result: &mut ListingResolveResult) {
        result.attempted("https://offline.example.org/");
        let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        result
            .failed(ResolveFailure::transport(coordinate.clone(), cause))
            .expect("fresh result accepts one outcome");
    }
}

/// Picks the newest version by the repository's positional convention.
fn newest(result: &ListingResolveResult) -> Result<String, ListingError> {
    let versions = result.versions()?;
    Ok(versions.iter().last().unwrap_or_default().to_string())
}

#[test]
fn test_listed_versions_reach_selection() {
    init_tracing();
    let repo = MemoryRepository::new("central", "https://repo.example.org")
        .with_module("org.example:widgets", &["1.0", "1.1", "2.0"]);
    let coordinate: ModuleCoordinate = "org.example:widgets".parse().unwrap();

    let result = list_module_versions(&repo, &coordinate);

    assert_eq!(result.state(), ListingState::Listed);
    assert!(result.is_authoritative());
    assert_eq!(newest(&result).unwrap(), "2.0");
    assert_eq!(
        result.versions().unwrap(),
        &VersionListing::from_versions(["2.0", "1.1", "1.0"])
    );
    assert_eq!(
        result.attempted_locations(),
        ["https://repo.example.org/org.example/widgets/"]
    );
}

#[test]
fn test_not_found_propagates_through_versions() {
    init_tracing();
    let repo = MemoryRepository::new("central", "https://repo.example.org");
    let coordinate = ModuleCoordinate::new("org.example", "gadgets");

    let result = list_module_versions(&repo, &coordinate);
    let err = newest(&result).unwrap_err();

    let failure = err.as_failure().unwrap();
    assert_eq!(failure.kind(), FailureKind::NotFound);
    assert_eq!(failure.coordinate(), &coordinate);
    assert_eq!(
        err.to_string(),
        "Could not find any version that matches org.example:gadgets.
Searched in the following locations:
    https://repo.example.org/org.example/gadgets/"
    );
}

#[test]
fn test_transport_failure_keeps_cause() {
    init_tracing();
    let coordinate = ModuleCoordinate::new("org.example", "widgets");

    let result = list_module_versions(&Offline, &coordinate);

    let failure = result.failure().unwrap();
    assert_eq!(failure.kind(), FailureKind::Transport);
    let source = std::error::Error::source(failure).unwrap();
    assert_eq!(source.to_string(), "connection refused");
}

#[test]
fn test_prefers_authoritative_source() {
    init_tracing();
    let cache = MemoryRepository::new("cache", "/var/cache/modules")
        .with_module("org.example:widgets", &["1.0"])
        .partial();
    let central = MemoryRepository::new("central", "https://repo.example.org")
        .with_module("org.example:widgets", &["1.0", "1.1"]);
    let coordinate = ModuleCoordinate::new("org.example", "widgets");

    let listers: [&dyn VersionLister; 2] = [&cache, &central];
    let mut attempted = ListingResolveResult::new();
    let mut chosen = None;
    for lister in listers {
        let result = list_module_versions(lister, &coordinate);
        result.apply_to(&mut attempted);
        if result.is_authoritative() && result.state() == ListingState::Listed {
            chosen = Some(result);
            break;
        }
    }

    let chosen = chosen.unwrap();
    assert_eq!(chosen.versions().unwrap().len(), 2);
    assert_eq!(attempted.attempted_locations().len(), 2);
    assert_eq!(attempted.state(), ListingState::Unknown);
}

#[test]
fn test_shared_after_population() {
    init_tracing();
    let repo = MemoryRepository::new("central", "https://repo.example.org")
        .with_module("org.example:widgets", &["1.0", "1.1"]);
    let coordinate = ModuleCoordinate::new("org.example", "widgets");

    let result = Arc::new(list_module_versions(&repo, &coordinate));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let result = Arc::clone(&result);
            thread::spawn(move || result.versions().map(|v| v.len()).unwrap_or(0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_second_outcome_is_rejected() {
    init_tracing();
    let mut result = ListingResolveResult::new();
    result.listed_versions(["1.0"]).unwrap();

    let failure = ResolveFailure::other(ModuleCoordinate::new("org.example", "widgets"), "late");
    assert!(result.failed(failure).is_err());
    assert_eq!(result.state(), ListingState::Listed);
    assert!(result.failure().is_none());
}
