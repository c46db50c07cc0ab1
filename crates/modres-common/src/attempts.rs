//! Attempted-resource tracking.
//!
//! Every resolve result remembers which physical resources (URLs, paths) were
//! consulted while producing it, so a failure can tell the user where it looked.

use crate::ResolveFailure;

/// Append-only record of the locations consulted during a resolve attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceAttempts {
    locations: Vec<String>,
}

impl ResourceAttempts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `location` was consulted.
    pub fn record(&mut self, location: impl Into<String>) {
        self.locations.push(location.into());
    }

    /// Returns the consulted locations in the order they were recorded.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Appends every location recorded here onto `target`.
    pub fn apply_to(&self, target: &mut ResourceAttempts) {
        target.locations.extend(self.locations.iter().cloned());
    }
}

/// A result that knows whether it holds an outcome and, if so, whether it failed.
pub trait ResolveResult {
    /// Returns the failure, if the attempt failed.
    fn failure(&self) -> Option<&ResolveFailure>;

    /// Returns true once the producer has recorded an outcome.
    fn has_result(&self) -> bool;
}

/// A result that records the resources consulted while producing it.
pub trait ResourceAwareResolveResult {
    fn attempts(&self) -> &ResourceAttempts;

    fn attempts_mut(&mut self) -> &mut ResourceAttempts;

    /// Records that `location` was consulted.
    fn attempted(&mut self, location: impl Into<String>)
    where
        Self: Sized,
    {
        self.attempts_mut().record(location);
    }

    fn attempted_locations(&self) -> &[String] {
        self.attempts().locations()
    }

    /// Copies the locations recorded on this result onto `target`.
    fn apply_to<T>(&self, target: &mut T)
    where
        T: ResourceAwareResolveResult,
        Self: Sized,
    {
        self.attempts().apply_to(target.attempts_mut());
    }
}
