//! The outcome of one listing attempt.
//!
//! A `ListingResolveResult` is created empty, receives exactly one outcome
//! from the repository that lists versions, and is read any number of times
//! afterwards. Recording a second outcome is rejected and leaves the first one
//! in place.

use modres_common::{ResolveFailure, ResolveResult, ResourceAttempts, ResourceAwareResolveResult};

use crate::{ListingError, ProtocolViolation, VersionListing};

/// Observable state of a listing result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListingState {
    /// No outcome has been recorded yet.
    Unknown,
    /// The versions were listed.
    Listed,
    /// The listing attempt failed.
    Failed,
}

#[derive(Debug, Clone)]
enum Outcome {
    Unknown,
    Listed(VersionListing),
    Failed(ResolveFailure),
}

impl Outcome {
    fn state(&self) -> ListingState {
        match self {
            Outcome::Unknown => ListingState::Unknown,
            Outcome::Listed(_) => ListingState::Listed,
            Outcome::Failed(_) => ListingState::Failed,
        }
    }
}

/// The result of listing the versions available for a module.
#[derive(Debug, Clone)]
pub struct ListingResolveResult {
    outcome: Outcome,
    authoritative: bool,
    attempts: ResourceAttempts,
}

impl Default for ListingResolveResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingResolveResult {
    /// Creates a result with no outcome. Results are authoritative by default.
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Unknown,
            authoritative: true,
            attempts: ResourceAttempts::new(),
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> ListingState {
        self.outcome.state()
    }

    /// Returns true once an outcome has been recorded.
    #[inline]
    pub fn has_result(&self) -> bool {
        !matches!(self.outcome, Outcome::Unknown)
    }

    /// Marks the module as listed with the given versions.
    pub fn listed(&mut self, versions: VersionListing) -> Result<(), ProtocolViolation> {
        self.ensure_unknown(ListingState::Listed)?;
        tracing::debug!(versions = versions.len(), "listing completed");
        self.outcome = Outcome::Listed(versions);
        Ok(())
    }

    /// Marks the module as listed with the given raw version identifiers.
    ///
    /// Equivalent to `listed(VersionListing::from_versions(versions))`.
    pub fn listed_versions<I, S>(&mut self, versions: I) -> Result<(), ProtocolViolation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Reject before materializing the listing.
        self.ensure_unknown(ListingState::Listed)?;
        self.listed(VersionListing::from_versions(versions))
    }

    /// Marks the listing as failed.
    pub fn failed(&mut self, failure: ResolveFailure) -> Result<(), ProtocolViolation> {
        self.ensure_unknown(ListingState::Failed)?;
        tracing::debug!(
            coordinate = %failure.coordinate(),
            kind = failure.kind().as_str(),
            "listing failed"
        );
        self.outcome = Outcome::Failed(failure);
        Ok(())
    }

    fn ensure_unknown(&self, attempted: ListingState) -> Result<(), ProtocolViolation> {
        match self.state() {
            ListingState::Unknown => Ok(()),
            current => {
                let violation = ProtocolViolation::AlreadyCompleted { attempted, current };
                tracing::error!(?attempted, ?current, "listing result completed twice");
                Err(violation)
            }
        }
    }

    /// Returns the listed versions.
    ///
    /// Fails with the stored failure if the listing failed, and with
    /// [`ProtocolViolation::NoResult`] if no outcome has been recorded.
    pub fn versions(&self) -> Result<&VersionListing, ListingError> {
        match &self.outcome {
            Outcome::Listed(versions) => Ok(versions),
            Outcome::Failed(failure) => Err(ListingError::Failed(failure.clone())),
            Outcome::Unknown => Err(ProtocolViolation::NoResult.into()),
        }
    }

    /// Consumes the result, returning the listed versions.
    pub fn into_versions(self) -> Result<VersionListing, ListingError> {
        match self.outcome {
            Outcome::Listed(versions) => Ok(versions),
            Outcome::Failed(failure) => Err(failure.into()),
            Outcome::Unknown => Err(ProtocolViolation::NoResult.into()),
        }
    }

    /// Returns the failure, present only when the listing failed.
    pub fn failure(&self) -> Option<&ResolveFailure> {
        match &self.outcome {
            Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns true if the source has a complete and final view of the
    /// module's versions.
    #[inline]
    pub fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    /// Sets the authoritative flag. Allowed at any point, independent of state.
    pub fn set_authoritative(&mut self, authoritative: bool) {
        self.authoritative = authoritative;
    }

    /// Returns this result with the authoritative flag overridden.
    pub fn with_authoritative(mut self, authoritative: bool) -> Self {
        self.authoritative = authoritative;
        self
    }
}

impl ResolveResult for ListingResolveResult {
    fn failure(&self) -> Option<&ResolveFailure> {
        ListingResolveResult::failure(self)
    }

    fn has_result(&self) -> bool {
        ListingResolveResult::has_result(self)
    }
}

impl ResourceAwareResolveResult for ListingResolveResult {
    fn attempts(&self) -> &ResourceAttempts {
        &self.attempts
    }

    fn attempts_mut(&mut self) -> &mut ResourceAttempts {
        &mut self.attempts
    }
}
