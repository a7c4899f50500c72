//! Article identifiers.
//!
//! Ids in the export are the string form of an integer. They are kept as
//! strings so that leading zeros and odd rows survive untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a catalog row (`article_id` column).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Split a comma-separated id list, skipping blanks.
    pub fn parse_list(list: &str) -> Vec<ArticleId> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ArticleId::from)
            .collect()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&String> for ArticleId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<&ArticleId> for ArticleId {
    fn from(id: &ArticleId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ArticleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string() {
        let id: ArticleId = "108775015".into();
        assert_eq!(id.as_str(), "108775015");
        assert_eq!(format!("{}", id), "108775015");
    }

    #[test]
    fn test_parse_list() {
        let ids = ArticleId::parse_list("1, 2,,3 ,");
        assert_eq!(
            ids,
            vec![ArticleId::new("1"), ArticleId::new("2"), ArticleId::new("3")]
        );
        assert!(ArticleId::parse_list("").is_empty());
    }

    #[test]
    fn test_borrow_lookup() {
        let mut set = std::collections::HashSet::new();
        set.insert(ArticleId::new("42"));
        assert!(set.contains("42"));
    }
}
