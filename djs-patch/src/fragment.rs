//! Appending generated code blocks to a document.

use crate::{Outcome, Patched};

/// A block of generated code with the imports it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Import lines placed at the top of the document, once.
    pub imports: Option<String>,
    /// The generated code itself.
    pub body: String,
}

impl Fragment {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            imports: None,
            body: body.into(),
        }
    }

    pub fn with_imports(mut self, imports: impl Into<String>) -> Self {
        self.imports = Some(imports.into());
        self
    }
}

/// Merge a fragment into a document.
///
/// The import block is prepended whole unless its trimmed text already occurs
/// somewhere in the document. The body is always appended; callers guard
/// against duplicate bodies themselves. Segments are trimmed and separated by
/// one blank line, and the result ends with a single newline.
///
/// ```
/// use djscaffold_patch::{Fragment, merge_fragment};
///
/// let fragment = Fragment::new("class Order(models.Model):\n    pass")
///     .with_imports("from django.db import models");
/// let merged = merge_fragment("", &fragment);
///
/// assert_eq!(
///     merged,
///     "from django.db import models\n\nclass Order(models.Model):\n    pass\n"
/// );
/// ```
pub fn merge_fragment(document: &str, fragment: &Fragment) -> String {
    let imports = match fragment.imports.as_deref().map(str::trim) {
        Some(block) if document.contains(block) => {
            tracing::debug!("imports already present");
            ""
        }
        Some(block) => block,
        None => "",
    };

    let segments = [imports, document, fragment.body.as_str()];

    let joined = segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{joined}\n")
}

/// Put `line` at the top of the document unless `key` already occurs in it
/// as a whole identifier.
///
/// Used for single import lines whose presence is decided by the imported
/// name rather than the exact statement.
pub fn prepend_line(document: &str, line: &str, key: &str) -> Patched {
    if contains_identifier(document, key) {
        return Patched::unchanged(document, Outcome::AlreadyPresent);
    }
    Patched::inserted(format!("{line}\n{document}"))
}

/// Whether `name` occurs without identifier characters on either side, so
/// `LineViewSet` is not found inside `OrderLineViewSet`.
fn contains_identifier(document: &str, name: &str) -> bool {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    document.match_indices(name).any(|(start, _)| {
        let before = document[..start].chars().next_back();
        let after = document[start + name.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPORTS: &str = "from rest_framework import serializers\nfrom .models import Order";
    const BODY: &str = "class OrderSerializer(serializers.ModelSerializer):\n    class Meta:\n        model = Order\n        fields = '__all__'";

    #[test]
    fn test_merge_into_empty_document() {
        let merged = merge_fragment("", &Fragment::new(BODY).with_imports(IMPORTS));

        assert_eq!(merged, format!("{IMPORTS}\n\n{BODY}\n"));
    }

    #[test]
    fn test_merge_keeps_existing_content_between_imports_and_body() {
        let document = "from .models import Customer\n\n\nclass CustomerSerializer:\n    pass\n\n\n";
        let merged = merge_fragment(document, &Fragment::new(BODY).with_imports(IMPORTS));

        assert!(merged.starts_with(IMPORTS));
        assert!(merged.contains("from .models import Customer\n\n\nclass CustomerSerializer:\n    pass\n\nclass OrderSerializer"));
        assert!(merged.ends_with("fields = '__all__'\n"));
    }

    #[test]
    fn test_import_is_idempotent() {
        let fragment = Fragment::new("").with_imports(IMPORTS);
        let once = merge_fragment("x = 1\n", &fragment);
        let twice = merge_fragment(&once, &fragment);

        assert_eq!(once, twice);
        assert_eq!(once.matches("from rest_framework import serializers").count(), 1);
    }

    #[test]
    fn test_import_with_surrounding_whitespace_is_detected() {
        let fragment = Fragment::new(BODY).with_imports(format!("\n\n{IMPORTS}\n"));
        let merged = merge_fragment(&format!("{IMPORTS}\n"), &fragment);

        assert_eq!(merged.matches(IMPORTS).count(), 1);
    }

    #[test]
    fn test_import_inside_longer_import_counts_as_present() {
        let document = "from .models import Order, Customer\n";
        let fragment = Fragment::new("x = 1").with_imports("from .models import Order");
        let merged = merge_fragment(document, &fragment);

        assert_eq!(merged, "from .models import Order, Customer\n\nx = 1\n");
    }

    #[test]
    fn test_partly_present_import_block_is_prepended_whole() {
        let document = "from django.contrib import admin\n\n# Register your models here.\n";
        let imports = "from django.contrib import admin\nfrom .models import Order";
        let merged = merge_fragment(document, &Fragment::new("").with_imports(imports));

        assert_eq!(
            merged,
            "from django.contrib import admin\nfrom .models import Order\n\nfrom django.contrib import admin\n\n# Register your models here.\n"
        );
    }

    #[test]
    fn test_result_ends_with_single_newline() {
        let merged = merge_fragment("a = 1\n\n\n\n", &Fragment::new("b = 2\n\n"));
        assert_eq!(merged, "a = 1\n\nb = 2\n");

        assert_eq!(merge_fragment("", &Fragment::default()), "\n");
    }

    #[test]
    fn test_prepend_line() {
        let patched = prepend_line("urlpatterns = []\n", "from .views import OrderViewSet", "OrderViewSet");
        assert_eq!(patched.outcome, Outcome::Inserted);
        assert_eq!(
            patched.content,
            "from .views import OrderViewSet\nurlpatterns = []\n"
        );

        let again = prepend_line(&patched.content, "from .views import OrderViewSet", "OrderViewSet");
        assert_eq!(again.outcome, Outcome::AlreadyPresent);
        assert_eq!(again.content, patched.content);
    }

    #[test]
    fn test_prepend_line_key_inside_longer_name() {
        let document = "from .views import OrderLineViewSet\n";
        let patched = prepend_line(document, "from .views import LineViewSet", "LineViewSet");

        assert_eq!(patched.outcome, Outcome::Inserted);
        assert!(patched.content.starts_with("from .views import LineViewSet\n"));
    }
}
