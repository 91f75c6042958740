//! Registering a line inside a collection such as a DRF router.

use regex::Regex;

use crate::{
    Outcome, Patched,
    locate::{AfterPattern, BeforeAnchor, Locator, splice},
};

/// A line registered right after the statement that opens a collection.
///
/// ```text
/// router = DefaultRouter()                         <- marker
/// router.register(r'orders', OrderViewSet)         <- line
/// ```
#[derive(Debug, Clone)]
pub struct Registration {
    /// The exact line; its presence means "already registered".
    pub line: String,
    /// Marker after which the line is inserted.
    pub marker: AfterPattern,
    /// Constructs with the marker's shape but another name or form. Finding
    /// one of these without the marker leaves the document alone.
    pub lookalike: Regex,
    /// Definition injected when the collection does not exist at all.
    pub definition: Definition,
}

/// The statement that creates a collection, plus the import it needs.
#[derive(Debug, Clone)]
pub struct Definition {
    /// Import line, e.g. `from rest_framework.routers import DefaultRouter`.
    pub import: String,
    /// Substring showing the import is already there, e.g. `import DefaultRouter`.
    pub import_key: String,
    /// The definition statement, e.g. `router = DefaultRouter()`.
    pub block: String,
    /// The definition goes before this anchor, or at the end without it.
    pub anchor: BeforeAnchor,
}

/// Insert a registration line into a document.
///
/// An already registered line leaves the document untouched. When the
/// marker is missing but a lookalike exists the document is also left
/// untouched and the outcome is [`Outcome::Ambiguous`].
pub fn register(document: &str, registration: &Registration) -> Patched {
    if document.contains(&registration.line) {
        tracing::debug!(line = %registration.line, "registration already present");
        return Patched::unchanged(document, Outcome::AlreadyPresent);
    }

    if let Some(offset) = registration.marker.find_insertion_point(document) {
        return Patched::inserted(splice(
            document,
            offset,
            &format!("\n{}", registration.line),
        ));
    }

    if let Some(found) = registration.lookalike.find(document) {
        let reason = format!(
            "found `{}` but no `{}`; add `{}` by hand",
            found.as_str().trim(),
            registration.definition.block,
            registration.line
        );
        tracing::warn!(%reason, "skipping ambiguous registration");
        return Patched::unchanged(document, Outcome::Ambiguous { reason });
    }

    let defined = define(document, &registration.definition);
    match registration.marker.find_insertion_point(&defined) {
        Some(offset) => {
            Patched::inserted(splice(&defined, offset, &format!("\n{}", registration.line)))
        }
        None => {
            tracing::warn!(block = %registration.definition.block, "definition does not match its marker");
            Patched::unchanged(document, Outcome::NotFound)
        }
    }
}

/// Add the collection definition and its import.
fn define(document: &str, definition: &Definition) -> String {
    let mut content = if document.contains(&definition.import_key) {
        document.to_string()
    } else {
        format!("{}\n{}", definition.import, document)
    };

    content = match definition.anchor.find_insertion_point(&content) {
        Some(offset) => splice(&content, offset, &format!("{}\n\n", definition.block)),
        None => {
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            format!("{content}\n{}\n", definition.block)
        }
    };

    content
}
