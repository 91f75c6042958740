//! The files `djs create` patches for one entity.

mod admin;
mod factory;
mod model;
mod serializer;
mod urls;
mod viewset;

pub use admin::AdminArtifact;
use djscaffold_patch::{Fragment, Outcome, Patched, merge_fragment};
pub use factory::FactoryArtifact;
pub use model::ModelArtifact;
pub use serializer::SerializerArtifact;
pub use urls::UrlsArtifact;
pub use viewset::ViewSetArtifact;

/// One generated piece of code and the app file it lives in.
pub trait Artifact {
    /// File inside the app directory, e.g. `models.py`
    fn file_name(&self) -> &'static str;

    /// Confirmation shown once the artifact is in place.
    fn message(&self, app: &str) -> String;

    /// Compute the new content of the file.
    fn apply(&self, document: &str) -> Patched;
}

/// Append a class unless `marker` shows it is already defined.
pub(crate) fn append_class(document: &str, marker: &str, fragment: &Fragment) -> Patched {
    if document.contains(marker) {
        tracing::debug!(marker, "class already defined");
        return Patched::unchanged(document, Outcome::AlreadyPresent);
    }
    Patched::inserted(merge_fragment(document, fragment))
}
