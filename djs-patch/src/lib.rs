//! Idempotent patching of source text.
//!
//! Every function here is pure: it takes the current document and returns
//! the new one together with an [`Outcome`] saying what happened. Reading
//! and writing files is the caller's business.
//!
//! # Module Organization
//!
//! - [`fragment`] - appending code blocks and import lines
//! - [`registration`] - registering a line after a collection's opening statement
//! - [`collection`] - adding elements to bracketed literals
//! - [`locate`] - the [`Locator`] seam all insertion heuristics go through

pub mod collection;
pub mod fragment;
pub mod locate;
pub mod registration;

pub use collection::{CollectionSpan, CollectionTarget, insert_element};
pub use fragment::{Fragment, merge_fragment, prepend_line};
pub use locate::{AfterPattern, BeforeAnchor, Locator};
pub use registration::{Definition, Registration, register};

/// What a patch did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New text was inserted.
    Inserted,
    /// The idempotency key was already present.
    AlreadyPresent,
    /// A similar but different structure exists; the document was left
    /// alone rather than guessing where the text belongs.
    Ambiguous { reason: String },
    /// The structure to patch does not exist.
    NotFound,
}

/// A patched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    pub outcome: Outcome,
}

impl Patched {
    pub fn inserted(content: String) -> Self {
        Self {
            content,
            outcome: Outcome::Inserted,
        }
    }

    pub fn unchanged(document: &str, outcome: Outcome) -> Self {
        Self {
            content: document.to_string(),
            outcome,
        }
    }

    /// Whether the document changed.
    pub fn is_changed(&self) -> bool {
        self.outcome == Outcome::Inserted
    }
}
