use djscaffold_core::RouterKind;
use djscaffold_patch::{
    AfterPattern, BeforeAnchor, Definition, Outcome, Patched, Registration, prepend_line, register,
};
use regex::Regex;

use super::Artifact;
use crate::{builder::CodeBuilder, names::EntityNames};

const ROUTER_MARKER: &str = r"(?m)^router\s*=\s*(?:\w+\.)*\w+Router\(\)";
const ROUTER_LOOKALIKE: &str = r"(?m)^[ \t]*\w+\s*=\s*(?:\w+\.)*\w*Router\(.*$";
const URLPATTERNS_ANCHOR: &str = "urlpatterns =";

/// `router.register(r'orders', OrderViewSet)` in urls.py
pub struct UrlsArtifact<'a> {
    names: &'a EntityNames,
    router: RouterKind,
}

impl<'a> UrlsArtifact<'a> {
    pub fn new(names: &'a EntityNames, router: RouterKind) -> Self {
        Self { names, router }
    }

    /// The registration line, e.g. `router.register(r'order_items', OrderItemViewSet)`
    pub fn register_line(&self) -> String {
        format!(
            "router.register(r'{}', {})",
            self.names.url_prefix(),
            self.names.viewset()
        )
    }

    /// Content of a fresh urls.py wired to a router.
    pub fn initial(&self) -> String {
        let class = self.router.class_name();
        CodeBuilder::python()
            .line("from django.urls import path, include")
            .line(&format!("from rest_framework.routers import {class}"))
            .blank()
            .line(&format!("router = {class}()"))
            .blank()
            .line("urlpatterns = [")
            .indent()
            .line("path('', include(router.urls)),")
            .dedent()
            .line("]")
            .build()
    }

    fn registration(&self) -> Registration {
        let class = self.router.class_name();
        Registration {
            line: self.register_line(),
            marker: AfterPattern::new(ROUTER_MARKER).expect("router marker is a valid pattern"),
            lookalike: Regex::new(ROUTER_LOOKALIKE).expect("router lookalike is a valid pattern"),
            definition: Definition {
                import: format!("from rest_framework.routers import {class}"),
                import_key: format!("import {class}"),
                block: format!("router = {class}()"),
                anchor: BeforeAnchor::new(URLPATTERNS_ANCHOR),
            },
        }
    }
}

impl Artifact for UrlsArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "urls.py"
    }

    fn message(&self, app: &str) -> String {
        format!(
            "Registered '{}' in urls.py for app '{}'.",
            self.names.viewset(),
            app
        )
    }

    /// Initialise an empty file, import the viewset, then register it.
    /// When the registration is skipped the file is left untouched.
    fn apply(&self, document: &str) -> Patched {
        let initialised = document.trim().is_empty();
        let base = if initialised {
            self.initial()
        } else {
            document.to_string()
        };

        let viewset = self.names.viewset();
        let imported = prepend_line(&base, &format!("from .views import {viewset}"), &viewset);
        let registered = register(&imported.content, &self.registration());

        match registered.outcome {
            Outcome::AlreadyPresent if !initialised && !imported.is_changed() => {
                Patched::unchanged(document, Outcome::AlreadyPresent)
            }
            Outcome::AlreadyPresent | Outcome::Inserted => Patched::inserted(registered.content),
            // Leave the file exactly as found, import included
            other => Patched::unchanged(document, other),
        }
    }
}
