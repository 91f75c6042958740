//! Case command report data structures.

use indexmap::IndexMap;

use super::output::{Output, Report};

/// Renderings of one input, keyed by case name.
#[derive(Debug)]
pub struct CaseReport {
    pub variants: IndexMap<&'static str, String>,
}

impl CaseReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.variants)
    }
}

impl Report for CaseReport {
    fn render(&self, out: &mut dyn Output) {
        // A single requested case prints bare so it can be piped
        if self.variants.len() == 1 {
            for value in self.variants.values() {
                out.preformatted(value);
            }
            return;
        }
        for (name, value) in &self.variants {
            out.key_value(name, value);
        }
    }
}
