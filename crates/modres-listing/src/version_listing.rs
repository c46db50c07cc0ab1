//! The set of versions produced by one listing attempt.

use indexmap::IndexSet;

/// Version identifiers found for a module, in the order the repository
/// reported them.
///
/// Repeated identifiers collapse onto their first occurrence. Equality ignores
/// order. Identifiers are neither sorted nor validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VersionListing {
    versions: IndexSet<String>,
}

impl VersionListing {
    /// Creates an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a listing from raw version identifiers, keeping their order.
    pub fn from_versions<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        versions.into_iter().collect()
    }

    /// Adds a version. Returns false if it was already listed.
    pub fn add(&mut self, version: impl Into<String>) -> bool {
        self.versions.insert(version.into())
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.contains(version)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Iterates over the versions in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.versions.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VersionListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for VersionListing {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionListing {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let listing = VersionListing::from_versions(["2.0", "1.0", "1.1"]);

        assert_eq!(listing.iter().collect::<Vec<_>>(), ["2.0", "1.0", "1.1"]);
        assert_eq!(listing.len(), 3);
        assert!(listing.contains("1.0"));
        assert!(!listing.contains("3.0"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let listing = VersionListing::from_versions(["1.0", "1.1", "1.0", "2.0", "1.1"]);
        assert_eq!(listing.iter().collect::<Vec<_>>(), ["1.0", "1.1", "2.0"]);

        let mut listing = VersionListing::new();
        assert!(listing.is_empty());
        assert!(listing.add("1.0"));
        assert!(!listing.add("1.0"));
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = VersionListing::from_versions(["1.0", "2.0"]);
        let b = VersionListing::from_versions(["2.0", "1.0"]);
        let c = VersionListing::from_versions(["1.0"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_no_syntax_validation() {
        let listing: VersionListing = ["", "not a version", "1.0-SNAPSHOT"].into_iter().collect();
        assert_eq!(listing.len(), 3);
        assert!(listing.contains(""));
    }

    #[test]
    fn test_into_iter() {
        let listing = VersionListing::from_versions(vec!["1.0".to_string(), "1.1".to_string()]);
        let borrowed: Vec<&String> = (&listing).into_iter().collect();
        assert_eq!(borrowed.len(), 2);

        let owned: Vec<String> = listing.into_iter().collect();
        assert_eq!(owned, ["1.0", "1.1"]);
    }
}
