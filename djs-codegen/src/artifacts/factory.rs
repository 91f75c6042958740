use djscaffold_patch::{Fragment, Patched};

use super::{Artifact, append_class};
use crate::{builder::CodeBuilder, names::EntityNames};

/// `class OrderFactory(factory.django.DjangoModelFactory)` in factories.py
pub struct FactoryArtifact<'a> {
    names: &'a EntityNames,
}

impl<'a> FactoryArtifact<'a> {
    pub fn new(names: &'a EntityNames) -> Self {
        Self { names }
    }

    fn fragment(&self) -> Fragment {
        let body = CodeBuilder::python()
            .class(&self.names.factory(), "factory.django.DjangoModelFactory")
            .class("Meta", "")
            .line(&format!("model = {}", self.names.model))
            .build();

        Fragment::new(body).with_imports(format!(
            "import factory\nfrom .models import {}",
            self.names.model
        ))
    }
}

impl Artifact for FactoryArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "factories.py"
    }

    fn message(&self, app: &str) -> String {
        format!(
            "Factory '{}' created in app '{}'.",
            self.names.factory(),
            app
        )
    }

    fn apply(&self, document: &str) -> Patched {
        append_class(
            document,
            &format!("class {}(", self.names.factory()),
            &self.fragment(),
        )
    }
}
