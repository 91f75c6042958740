use djscaffold_patch::{Fragment, Patched};

use super::{Artifact, append_class};
use crate::{builder::CodeBuilder, names::EntityNames};

/// `@admin.register(Order)` in admin.py
pub struct AdminArtifact<'a> {
    names: &'a EntityNames,
}

impl<'a> AdminArtifact<'a> {
    pub fn new(names: &'a EntityNames) -> Self {
        Self { names }
    }

    fn fragment(&self) -> Fragment {
        let body = CodeBuilder::python()
            .line(&format!("@admin.register({})", self.names.model))
            .class(&self.names.admin(), "admin.ModelAdmin")
            .line("pass")
            .build();

        Fragment::new(body).with_imports(format!(
            "from django.contrib import admin\nfrom .models import {}",
            self.names.model
        ))
    }
}

impl Artifact for AdminArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "admin.py"
    }

    fn message(&self, app: &str) -> String {
        format!(
            "Registered '{}' in admin for app '{}'.",
            self.names.model, app
        )
    }

    fn apply(&self, document: &str) -> Patched {
        append_class(
            document,
            &format!("class {}(", self.names.admin()),
            &self.fragment(),
        )
    }
}

#[cfg(test)]
mod tests {
    use djscaffold_patch::Outcome;

    use super::*;

    #[test]
    fn test_admin_registration_is_applied_once() {
        let names = EntityNames::new("order").unwrap();
        let artifact = AdminArtifact::new(&names);

        let once = artifact.apply("").content;
        let twice = artifact.apply(&once);

        assert_eq!(twice.outcome, Outcome::AlreadyPresent);
        assert_eq!(twice.content, once);
        assert_eq!(
            once,
            "from django.contrib import admin\nfrom .models import Order\n\n@admin.register(Order)\nclass OrderAdmin(admin.ModelAdmin):\n    pass\n"
        );
    }
}
