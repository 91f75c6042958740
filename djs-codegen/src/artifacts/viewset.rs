use djscaffold_patch::{Fragment, Patched};

use super::{Artifact, append_class};
use crate::{builder::CodeBuilder, names::EntityNames};

/// `class OrderViewSet(viewsets.ModelViewSet)` in views.py
pub struct ViewSetArtifact<'a> {
    names: &'a EntityNames,
}

impl<'a> ViewSetArtifact<'a> {
    pub fn new(names: &'a EntityNames) -> Self {
        Self { names }
    }

    fn fragment(&self) -> Fragment {
        let body = CodeBuilder::python()
            .class(&self.names.viewset(), "viewsets.ModelViewSet")
            .line(&format!("queryset = {}.objects.all()", self.names.model))
            .line(&format!("serializer_class = {}", self.names.serializer()))
            .build();

        Fragment::new(body).with_imports(format!(
            "from rest_framework import viewsets\nfrom .models import {}\nfrom .serializers import {}",
            self.names.model,
            self.names.serializer()
        ))
    }
}

impl Artifact for ViewSetArtifact<'_> {
    fn file_name(&self) -> &'static str {
        "views.py"
    }

    fn message(&self, app: &str) -> String {
        format!(
            "ViewSet '{}' created in app '{}'.",
            self.names.viewset(),
            app
        )
    }

    fn apply(&self, document: &str) -> Patched {
        append_class(
            document,
            &format!("class {}(", self.names.viewset()),
            &self.fragment(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewset_body() {
        let names = EntityNames::new("Customer").unwrap();
        let patched = ViewSetArtifact::new(&names).apply("from django.shortcuts import render\n");

        insta::assert_snapshot!(patched.content, @r"
from rest_framework import viewsets
from .models import Customer
from .serializers import CustomerSerializer

from django.shortcuts import render

class CustomerViewSet(viewsets.ModelViewSet):
    queryset = Customer.objects.all()
    serializer_class = CustomerSerializer
");
    }
}
