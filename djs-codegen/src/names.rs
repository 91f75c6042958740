//! Names derived from the entity name a user passes on the command line.

use djscaffold_core::to_pascal_case;

/// Every identifier the templates need for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    /// Model class, e.g. `OrderItem`
    pub model: String,
    /// Model name split before each inner capital and lowercased,
    /// e.g. `order_item`. Digits stay attached to the word before them.
    pub snake: String,
}

impl EntityNames {
    /// Derive names from free-form input (`order_item`, `OrderItem`, `order-item`).
    ///
    /// Returns `None` when the input has no word characters or would make
    /// a class name starting with a digit.
    pub fn new(raw: &str) -> Option<Self> {
        let model = to_pascal_case(raw);
        if model.is_empty() || model.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let snake = underscore_capitals(&model);
        Some(Self { model, snake })
    }

    pub fn serializer(&self) -> String {
        format!("{}Serializer", self.model)
    }

    pub fn viewset(&self) -> String {
        format!("{}ViewSet", self.model)
    }

    pub fn factory(&self) -> String {
        format!("{}Factory", self.model)
    }

    pub fn admin(&self) -> String {
        format!("{}Admin", self.model)
    }

    /// Router prefix, e.g. `order_items`
    pub fn url_prefix(&self) -> String {
        format!("{}s", self.snake)
    }
}

fn underscore_capitals(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.char_indices() {
        if i > 0 && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}
