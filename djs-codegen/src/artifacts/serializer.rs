use djscaffold_patch::{Fragment, Patched};

use super::{Artifact, append_class};
use crate::{builder::CodeBuilder, names::EntityNames};

/// `class OrderSerializer(serializers.ModelSerializer)` in serializers.py
pub struct SerializerArtifact<'a> {
    names: &'a EntityNames,
}

impl<'a> SerializerArtifact<'a> {
    pub fn new(names: &'a EntityNames) -> Self {
        Self { names }
    }

    fn fragment(&self) -> Fragment {
        let body = CodeBuilder::python()
            .class(&self.names.serializer(), "serializers.ModelSerializer")
            .class("Meta", "")
            .line(&format!("model = {}", self.names.model))
            .line("fields = '__all__'")
            .build();

        Fragment::new(body).with_imports(format!(
            "from rest_framework import serializers\nfrom .models import {}",
            self.names.model
        ))
    }
}

impl Artifact for SerializerArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "serializers.py"
    }

    fn message(&self, app: &str) -> String {
        format!(
            "Serializer '{}' created in app '{}'.",
            self.names.serializer(),
            app
        )
    }

    fn apply(&self, document: &str) -> Patched {
        append_class(
            document,
            &format!("class {}(", self.names.serializer()),
            &self.fragment(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializer_into_missing_file() {
        let names = EntityNames::new("order_item").unwrap();
        let patched = SerializerArtifact::new(&names).apply("");

        insta::assert_snapshot!(patched.content, @r"
from rest_framework import serializers
from .models import OrderItem

class OrderItemSerializer(serializers.ModelSerializer):
    class Meta:
        model = OrderItem
        fields = '__all__'
");
    }
}
