use djscaffold_patch::{Fragment, Patched};

use super::{Artifact, append_class};
use crate::{builder::CodeBuilder, names::EntityNames};

/// `class Order(models.Model)` in models.py
pub struct ModelArtifact<'a> {
    names: &'a EntityNames,
}

impl<'a> ModelArtifact<'a> {
    pub fn new(names: &'a EntityNames) -> Self {
        Self { names }
    }

    fn fragment(&self) -> Fragment {
        let body = CodeBuilder::python()
            .class(&self.names.model, "models.Model")
            .line("# Define your model fields here")
            .line("pass")
            .build();

        Fragment::new(body).with_imports("from django.db import models")
    }
}

impl Artifact for ModelArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "models.py"
    }

    fn message(&self, app: &str) -> String {
        format!("Model '{}' created in app '{}'.", self.names.model, app)
    }

    fn apply(&self, document: &str) -> Patched {
        append_class(
            document,
            &format!("class {}(", self.names.model),
            &self.fragment(),
        )
    }
}

#[cfg(test)]
mod tests {
    use djscaffold_patch::Outcome;

    use super::*;

    #[test]
    fn test_model_into_startapp_models() {
        let names = EntityNames::new("order").unwrap();
        let document = "from django.db import models\n\n# Create your models here.\n";
        let patched = ModelArtifact::new(&names).apply(document);

        insta::assert_snapshot!(patched.content, @r"
from django.db import models

# Create your models here.

class Order(models.Model):
    # Define your model fields here
    pass
");
    }

    #[test]
    fn test_model_already_defined() {
        let names = EntityNames::new("order").unwrap();
        let document = "class Order(models.Model):\n    total = 1\n";
        let patched = ModelArtifact::new(&names).apply(document);

        assert_eq!(patched.outcome, Outcome::AlreadyPresent);
        assert_eq!(patched.content, document);
    }
}
