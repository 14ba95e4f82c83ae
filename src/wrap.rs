//! Greedy word wrapping for a single style.

#[cfg(test)]
#[path = "wrap_test.rs"]
mod wrap_test;

use crate::measure::{MeasureSurface, measure_text};
use crate::style::RichTextStyle;

/// Split `text` into explicit paragraphs on `\n` / `\r\n`.
///
/// Always yields at least one (possibly empty) paragraph.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|p| p.strip_suffix('\r').unwrap_or(p))
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Explicit line breaks are honored first. Within a paragraph words are packed
/// greedily, breaking before the word that would overflow. A single word wider
/// than `max_width` stays alone on its line; words are never split. Empty
/// input yields exactly one empty line so the caret keeps its height.
#[must_use]
pub fn wrap_text(
    text: &str,
    style: &RichTextStyle,
    max_width: f64,
    surface: Option<&dyn MeasureSurface>,
) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in paragraphs(text) {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure_text(&candidate, style, surface) <= max_width {
                current = candidate;
            } else {
                out.push(std::mem::replace(&mut current, word.to_owned()));
            }
        }
        out.push(current);
    }
    out
}
