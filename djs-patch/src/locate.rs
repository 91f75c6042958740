//! Finding where generated text goes.
//!
//! Insertion points are found with structural heuristics instead of a
//! parser. Everything that picks an offset in a document goes through
//! [`Locator`], so a grammar-aware implementation can replace these without
//! touching callers.

use regex::Regex;

/// Finds the byte offset at which new text is inserted.
pub trait Locator {
    /// Offset into `document`, or `None` when the structure is absent.
    fn find_insertion_point(&self, document: &str) -> Option<usize>;
}

/// Insertion point right after the first match of a regex marker,
/// e.g. `router = DefaultRouter()`.
#[derive(Debug, Clone)]
pub struct AfterPattern {
    pattern: Regex,
}

impl AfterPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Locator for AfterPattern {
    fn find_insertion_point(&self, document: &str) -> Option<usize> {
        self.pattern.find(document).map(|m| m.end())
    }
}

/// Insertion point at the first occurrence of a literal anchor,
/// e.g. `urlpatterns =`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeforeAnchor {
    anchor: String,
}

impl BeforeAnchor {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }
}

impl Locator for BeforeAnchor {
    fn find_insertion_point(&self, document: &str) -> Option<usize> {
        document.find(&self.anchor)
    }
}

/// Insert `text` at `offset`.
pub(crate) fn splice(document: &str, offset: usize, text: &str) -> String {
    let mut out = String::with_capacity(document.len() + text.len());
    out.push_str(&document[..offset]);
    out.push_str(text);
    out.push_str(&document[offset..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_pattern() {
        let locator = AfterPattern::new(r"router\s*=\s*\w+Router\(\)").unwrap();
        let document = "x = 1\nrouter  =  DefaultRouter()\ny = 2\n";

        let offset = locator.find_insertion_point(document).unwrap();
        assert_eq!(&document[..offset], "x = 1\nrouter  =  DefaultRouter()");
        assert_eq!(locator.find_insertion_point("router = []"), None);
    }

    #[test]
    fn test_before_anchor() {
        let locator = BeforeAnchor::new("urlpatterns =");
        let document = "from x import y\n\nurlpatterns = []\n";

        assert_eq!(locator.find_insertion_point(document), Some(17));
        assert_eq!(locator.find_insertion_point("pass\n"), None);
    }

    #[test]
    fn test_splice() {
        assert_eq!(splice("ac", 1, "b"), "abc");
        assert_eq!(splice("", 0, "x"), "x");
    }
}
