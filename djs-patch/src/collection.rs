//! Adding elements to a bracketed collection literal such as `INSTALLED_APPS`.

use regex::Regex;

use crate::{
    Outcome, Patched,
    locate::{Locator, splice},
};

const DEFAULT_INDENT: &str = "    ";

/// An assignment of a list, tuple or set literal to a name.
#[derive(Debug, Clone)]
pub struct CollectionTarget {
    name: String,
    assignment: Regex,
}

/// Byte positions of a collection literal inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpan {
    /// Offset of the opening delimiter.
    pub open: usize,
    /// Offset of the matching closing delimiter.
    pub close: usize,
    /// Offset just past the last character before `close` that is neither
    /// whitespace nor part of a comment.
    pub last_token_end: usize,
}

impl CollectionSpan {
    /// Text between the delimiters.
    pub fn inner<'a>(&self, document: &'a str) -> &'a str {
        &document[self.open + 1..self.close]
    }
}

impl CollectionTarget {
    /// Target the literal assigned to `name` at the start of a line.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let pattern = format!(r"(?m)^{}\s*(?::[^=\n]*)?=\s*", regex::escape(&name));
        let assignment = Regex::new(&pattern).expect("escaped name is a valid pattern");
        Self { name, assignment }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locate the literal by scanning for the delimiter that brings the
    /// nesting depth back to zero.
    ///
    /// Only the literal's own delimiter pair is counted. Quoted strings and
    /// `#` comments are skipped.
    pub fn find_span(&self, document: &str) -> Option<CollectionSpan> {
        self.assignment.find_iter(document).find_map(|m| {
            let open = m.end();
            let close_char = match document[open..].chars().next()? {
                '[' => ']',
                '(' => ')',
                '{' => '}',
                _ => return None,
            };
            scan_to_close(document, open, close_char)
        })
    }
}

impl Locator for CollectionTarget {
    /// Where a new element line starts: the beginning of the closing
    /// delimiter's line when it stands alone, the delimiter itself otherwise.
    fn find_insertion_point(&self, document: &str) -> Option<usize> {
        let span = self.find_span(document)?;
        Some(match closing_line_start(document, &span) {
            Some(line_start) => line_start,
            None => span.close,
        })
    }
}

fn scan_to_close(document: &str, open: usize, close_char: char) -> Option<CollectionSpan> {
    let open_char = document[open..].chars().next()?;
    let mut depth = 0usize;
    let mut last_token_end = open + open_char.len_utf8();
    let mut chars = document[open..]
        .char_indices()
        .map(|(i, c)| (open + i, c))
        .peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '#' => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
                continue;
            }
            '\'' | '"' => {
                let mut escaped = false;
                let mut end = document.len();
                for (j, s) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if s == '\\' {
                        escaped = true;
                    } else if s == c {
                        end = j + s.len_utf8();
                        break;
                    }
                }
                last_token_end = end;
                continue;
            }
            c if c == open_char => depth += 1,
            c if c == close_char => {
                depth -= 1;
                if depth == 0 {
                    return Some(CollectionSpan {
                        open,
                        close: i,
                        last_token_end,
                    });
                }
            }
            c if c.is_whitespace() => continue,
            _ => {}
        }
        last_token_end = i + c.len_utf8();
    }

    None
}

/// Start of the closing delimiter's line, when nothing but whitespace
/// precedes the delimiter on that line.
fn closing_line_start(document: &str, span: &CollectionSpan) -> Option<usize> {
    let line_start = document[..span.close].rfind('\n').map(|i| i + 1)?;
    let alone = line_start > span.open && document[line_start..span.close].trim().is_empty();
    alone.then_some(line_start)
}

/// Indentation for a new element line: that of the line above the closing
/// delimiter, or four spaces when that line is blank or opens the literal.
fn element_indent<'a>(document: &'a str, span: &CollectionSpan, line_start: usize) -> &'a str {
    let prev_end = line_start - 1;
    let prev_start = document[..prev_end].rfind('\n').map_or(0, |i| i + 1);
    let prev_line = &document[prev_start..prev_end];

    if prev_start <= span.open || prev_line.trim().is_empty() {
        return DEFAULT_INDENT;
    }
    let trimmed = prev_line.trim_start();
    &prev_line[..prev_line.len() - trimmed.len()]
}

/// Add `element` as the last entry of the collection.
///
/// The element gets a trailing comma (so one-element tuples stay tuples)
/// and the previous last entry gets one if it lacks it. Nothing changes when
/// the element already appears inside the literal.
pub fn insert_element(document: &str, target: &CollectionTarget, element: &str) -> Patched {
    let Some(span) = target.find_span(document) else {
        tracing::debug!(name = target.name(), "collection not found");
        return Patched::unchanged(document, Outcome::NotFound);
    };

    if span.inner(document).contains(element) {
        return Patched::unchanged(document, Outcome::AlreadyPresent);
    }

    let last = document[..span.last_token_end].chars().next_back();
    let needs_comma = span.last_token_end > span.open + 1 && last != Some(',');
    let comma = if needs_comma { "," } else { "" };

    let content = match closing_line_start(document, &span) {
        Some(line_start) => {
            let indent = element_indent(document, &span, line_start);
            // Match the line ending of the line above the delimiter
            let newline = if document[..line_start].ends_with("\r\n") {
                "\r\n"
            } else {
                "\n"
            };
            let with_element = splice(
                document,
                line_start,
                &format!("{indent}{element},{newline}"),
            );
            splice(&with_element, span.last_token_end, comma)
        }
        None => {
            let separator = if span.last_token_end > span.open + 1 { " " } else { "" };
            splice(
                document,
                span.last_token_end,
                &format!("{comma}{separator}{element},"),
            )
        }
    };

    Patched::inserted(content)
}
