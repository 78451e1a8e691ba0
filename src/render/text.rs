//! Text clean-up applied before anything reaches the terminal

use crate::config::ELLIPSIS;

/// Neutralise characters that could drive the terminal instead of being shown:
/// line breaks and tabs become spaces, every other control character (ESC
/// included, so no escape sequence survives) is dropped.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            ch if ch.is_control() => None,
            // Bidi overrides can visually reorder the rest of the line
            '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' => None,
            ch => Some(ch),
        })
        .collect()
}

/// Cut `text` to `max_chars` characters, appending the ellipsis marker when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Format a rating with one decimal, `0` when nothing was rated.
pub fn format_rating(average: f64, count: usize) -> String {
    if count == 0 {
        "0".to_string()
    } else {
        format!("{average:.1}")
    }
}
