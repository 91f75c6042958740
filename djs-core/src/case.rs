//! Identifier case conversion.
//!
//! Every renderer goes through [`split_words`], so `"XMLHttpRequest"`,
//! `"xml_http_request"` and `"xml-http request"` all produce the same
//! variants.

use clap::ValueEnum;

/// A naming convention a word sequence can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Case {
    /// `OrderItem`
    Pascal,
    /// `orderItem`
    Camel,
    /// `order_item`
    Snake,
    /// `order-item`
    Kebab,
    /// `Order Item`
    Title,
    /// `ORDER_ITEM`
    Constant,
    /// `Order item`
    Sentence,
}

impl Case {
    /// All variants, in display order.
    pub const ALL: [Case; 7] = [
        Case::Pascal,
        Case::Camel,
        Case::Snake,
        Case::Kebab,
        Case::Title,
        Case::Constant,
        Case::Sentence,
    ];

    /// Render `input` in this convention.
    pub fn render(self, input: &str) -> String {
        match self {
            Case::Pascal => to_pascal_case(input),
            Case::Camel => to_camel_case(input),
            Case::Snake => to_snake_case(input),
            Case::Kebab => to_kebab_case(input),
            Case::Title => to_title_case(input),
            Case::Constant => to_constant_case(input),
            Case::Sentence => to_sentence_case(input),
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Case::Pascal => "pascal",
            Case::Camel => "camel",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Title => "title",
            Case::Constant => "constant",
            Case::Sentence => "sentence",
        }
    }
}

/// Split an identifier-like string into word tokens.
///
/// `_`, `-` and whitespace separate words. Inside a separator-free piece,
/// words are found left to right: an acronym directly followed by a
/// capitalized word (`XMLHttp` -> `XML`, `Http`), a capitalized or lowercase
/// word, a digit run, or a trailing uppercase run.
///
/// ```
/// use djscaffold_core::split_words;
///
/// assert_eq!(split_words("XMLHttpRequest"), ["XML", "Http", "Request"]);
/// assert_eq!(split_words("user_id_2"), ["user", "id", "2"]);
/// ```
pub fn split_words(input: &str) -> Vec<String> {
    let normalized = input
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>();

    match normalized.as_slice() {
        [] => Vec::new(),
        [single] => {
            let words = scan_words(single);
            if words.is_empty() {
                alphanumeric_runs(single)
            } else {
                words
            }
        }
        pieces => pieces
            .iter()
            .flat_map(|piece| {
                let words = scan_words(piece);
                if words.is_empty() {
                    vec![(*piece).to_string()]
                } else {
                    words
                }
            })
            .collect(),
    }
}

/// Tokenize a separator-free piece. Characters that start no word are skipped.
fn scan_words(piece: &str) -> Vec<String> {
    let chars: Vec<char> = piece.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_uppercase() {
            let upper_end = run_end(&chars, i, |c| c.is_ascii_uppercase());
            let followed_by_lower = chars.get(upper_end).is_some_and(char::is_ascii_lowercase);

            if followed_by_lower && upper_end - i >= 2 {
                // Acronym: stop before the capital that starts the next word
                words.push(chars[i..upper_end - 1].iter().collect());
                i = upper_end - 1;
            } else if followed_by_lower {
                let end = run_end(&chars, upper_end, char::is_ascii_lowercase);
                words.push(chars[i..end].iter().collect());
                i = end;
            } else {
                words.push(chars[i..upper_end].iter().collect());
                i = upper_end;
            }
        } else if c.is_ascii_lowercase() {
            let end = run_end(&chars, i, |c| c.is_ascii_lowercase());
            words.push(chars[i..end].iter().collect());
            i = end;
        } else if c.is_ascii_digit() {
            let end = run_end(&chars, i, |c| c.is_ascii_digit());
            words.push(chars[i..end].iter().collect());
            i = end;
        } else {
            i += 1;
        }
    }

    words
}

fn run_end(chars: &[char], start: usize, pred: impl Fn(&char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|c| !pred(c))
        .map_or(chars.len(), |offset| start + offset)
}

fn alphanumeric_runs(piece: &str) -> Vec<String> {
    piece
        .split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

fn join_with(input: &str, sep: &str, f: impl Fn(&str) -> String) -> String {
    split_words(input)
        .iter()
        .map(|word| f(word.as_str()))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Convert a string to PascalCase (e.g., "order_item" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    join_with(s, "", capitalize)
}

/// Convert a string to camelCase (e.g., "order_item" -> "orderItem")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "OrderItem" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    join_with(s, "_", str::to_lowercase)
}

/// Convert a string to kebab-case (e.g., "OrderItem" -> "order-item")
pub fn to_kebab_case(s: &str) -> String {
    join_with(s, "-", str::to_lowercase)
}

/// Convert a string to Title Case (e.g., "order_item" -> "Order Item")
pub fn to_title_case(s: &str) -> String {
    join_with(s, " ", capitalize)
}

/// Convert a string to CONSTANT_CASE (e.g., "orderItem" -> "ORDER_ITEM")
pub fn to_constant_case(s: &str) -> String {
    join_with(s, "_", str::to_uppercase)
}

/// Convert a string to Sentence case (e.g., "OrderItem" -> "Order item").
/// Input without any words comes back unchanged.
pub fn to_sentence_case(s: &str) -> String {
    let sentence = join_with(s, " ", str::to_lowercase);
    let mut chars = sentence.chars();
    match chars.next() {
        None => s.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_acronym_before_word() {
        assert_eq!(split_words("XMLHttpRequest"), ["XML", "Http", "Request"]);
        assert_eq!(split_words("parseHTMLString"), ["parse", "HTML", "String"]);
    }

    #[test]
    fn test_split_separators() {
        assert_eq!(split_words("user_id_2"), ["user", "id", "2"]);
        assert_eq!(split_words("my-kebab-case"), ["my", "kebab", "case"]);
        assert_eq!(split_words("  hello   world "), ["hello", "world"]);
        assert_eq!(split_words("__a--b__"), ["a", "b"]);
    }

    #[test]
    fn test_split_mixed_snake_and_camel() {
        assert_eq!(split_words("order_ItemLine"), ["order", "Item", "Line"]);
        assert_eq!(split_words("api_URLPath"), ["api", "URL", "Path"]);
    }

    #[test]
    fn test_split_digits_are_standalone() {
        assert_eq!(split_words("user2Name"), ["user", "2", "Name"]);
        assert_eq!(split_words("v10"), ["v", "10"]);
        assert_eq!(split_words("2024"), ["2024"]);
    }

    #[test]
    fn test_split_trailing_acronym() {
        assert_eq!(split_words("userID"), ["user", "ID"]);
        assert_eq!(split_words("HTTP"), ["HTTP"]);
    }

    #[test]
    fn test_split_fallbacks() {
        assert!(split_words("").is_empty());
        assert!(split_words("___").is_empty());
        // No ASCII word: keep alphanumeric runs
        assert_eq!(split_words("éà"), ["éà"]);
        // Separated piece without ASCII word is kept whole
        assert_eq!(split_words("café_ü"), ["caf", "ü"]);
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_pascal_case("XMLHttpRequest"), "XmlHttpRequest");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("a"), "A");
    }

    #[test]
    fn test_pascal_case_is_idempotent() {
        for input in ["XMLHttpRequest", "order_item", "user2Name", "my-kebab-case", "HTTP", "x"] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("order_item"), "orderItem");
        assert_eq!(to_camel_case("OrderItem"), "orderItem");
        assert_eq!(to_camel_case("A"), "a");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
    }

    #[test]
    fn test_other_variants() {
        assert_eq!(to_kebab_case("OrderItem"), "order-item");
        assert_eq!(to_title_case("order_item"), "Order Item");
        assert_eq!(to_constant_case("orderItem"), "ORDER_ITEM");
        assert_eq!(to_sentence_case("OrderItem"), "Order item");
    }

    #[test]
    fn test_sentence_case_of_separators_only() {
        assert_eq!(to_sentence_case("___"), "___");
    }

    #[test]
    fn test_numbers_unaffected() {
        for case in Case::ALL {
            assert_eq!(case.render("42"), "42", "case: {}", case.name());
        }
    }

    #[test]
    fn test_empty_input() {
        for case in Case::ALL {
            assert_eq!(case.render(""), "", "case: {}", case.name());
        }
    }

    #[test]
    fn test_single_character() {
        assert_eq!(Case::Pascal.render("q"), "Q");
        assert_eq!(Case::Constant.render("q"), "Q");
        assert_eq!(Case::Snake.render("Q"), "q");
        assert_eq!(Case::Camel.render("Q"), "q");
    }
}
