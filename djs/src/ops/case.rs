//! Case operation - render an input in every naming convention.

use djscaffold_core::Case;

use crate::reports::CaseReport;

/// Render `input` in `only`, or in every case when `None`.
pub fn case(input: &str, only: Option<Case>) -> CaseReport {
    let cases = match only {
        Some(case) => vec![case],
        None => Case::ALL.to_vec(),
    };
    let variants = cases
        .into_iter()
        .map(|case| (case.name(), case.render(input)))
        .collect();

    CaseReport { variants }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cases_in_order() {
        let report = case("order_item", None);

        assert_eq!(
            report.to_json().unwrap(),
            r#"{
  "pascal": "OrderItem",
  "camel": "orderItem",
  "snake": "order_item",
  "kebab": "order-item",
  "title": "Order Item",
  "constant": "ORDER_ITEM",
  "sentence": "Order item"
}"#
        );
    }

    #[test]
    fn test_single_case() {
        let report = case("XMLHttpRequest", Some(Case::Snake));

        assert_eq!(report.variants.len(), 1);
        assert_eq!(report.variants["snake"], "xml_http_request");
    }
}
