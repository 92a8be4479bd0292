#![forbid(unsafe_code)]

//! The catalog of variable names a field can offer.
//!
//! A catalog is a fixed, ordered list. Completion filters it case
//! insensitively by prefix and preserves catalog order; decoding resolves
//! names case sensitively and exactly. `var10` in the catalog never shadows
//! `var1` because resolution compares whole names, not prefixes.

/// An ordered set of variable names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Create a catalog from names, keeping the given order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// All names, in catalog order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog has no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact, case-sensitive lookup. Used when decoding `${name}` markers.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .map(String::as_str)
    }

    /// Names starting with `prefix`, case insensitively, in catalog order,
    /// truncated to `limit`. An empty prefix matches everything.
    #[must_use]
    pub fn filter_prefix(&self, prefix: &str, limit: usize) -> Vec<&str> {
        if limit == 0 {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(["userName", "userId", "email", "User_extra"])
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let c = catalog();
        assert_eq!(
            c.filter_prefix("USER", 10),
            ["userName", "userId", "User_extra"]
        );
        assert_eq!(c.filter_prefix("user_", 10), ["User_extra"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let c = Catalog::new(["bb", "ab", "aa"]);
        assert_eq!(c.filter_prefix("a", 10), ["ab", "aa"]);
    }

    #[test]
    fn test_filter_truncates_to_limit() {
        let c = Catalog::new(["a1", "a2", "a3", "a4"]);
        assert_eq!(c.filter_prefix("a", 2), ["a1", "a2"]);
        assert!(c.filter_prefix("a", 0).is_empty());
    }

    #[test]
    fn test_filter_empty_prefix_matches_all() {
        let c = Catalog::new(["x", "y"]);
        assert_eq!(c.filter_prefix("", 10), ["x", "y"]);
    }

    #[test]
    fn test_filter_no_matches() {
        let c = catalog();
        assert!(c.filter_prefix("zzz", 10).is_empty());
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let c = catalog();
        assert_eq!(c.resolve("userId"), Some("userId"));
        assert_eq!(c.resolve("userid"), None);
        assert_eq!(c.resolve("user"), None);
    }

    #[test]
    fn test_resolve_does_not_prefix_shadow() {
        let c = Catalog::new(["var10", "var1"]);
        assert_eq!(c.resolve("var1"), Some("var1"));
        assert_eq!(c.resolve("var10"), Some("var10"));
    }

    #[test]
    fn test_empty_catalog() {
        let c = Catalog::default();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert_eq!(c.resolve("x"), None);
        assert!(c.filter_prefix("", 10).is_empty());
    }
}
