//! Code builder utility for generating properly indented Python.

/// One indent level (PEP 8).
const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use djscaffold_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .line("class Order(models.Model):")
///     .indent()
///     .line("pass")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "class Order(models.Model):\n    pass\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn python() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Python `class` header and indent its body. An empty `base`
    /// gives a bare `class Name:`.
    pub fn class(self, name: &str, base: &str) -> Self {
        let header = if base.is_empty() {
            format!("class {name}:")
        } else {
            format!("class {name}({base}):")
        };
        self.line(&header).indent()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_class() {
        let code = CodeBuilder::python()
            .class("OrderSerializer", "serializers.ModelSerializer")
            .class("Meta", "")
            .line("model = Order")
            .build();

        assert_eq!(
            code,
            "class OrderSerializer(serializers.ModelSerializer):\n    class Meta:\n        model = Order\n"
        );
    }

    #[test]
    fn test_blank_and_dedent() {
        let code = CodeBuilder::python()
            .line("a")
            .indent()
            .line("b")
            .dedent()
            .dedent()
            .blank()
            .line("c")
            .build();

        assert_eq!(code, "a\n    b\n\nc\n");
    }
}
