// src/util.rs — Shared utility functions

use std::borrow::Cow;

/// One-line preview of user text for log output.
///
/// Keeps at most `max_chars` characters, flattens line breaks to spaces and
/// appends `…` when something was cut.
pub fn log_preview(s: &str, max_chars: usize) -> Cow<'_, str> {
    let cut = s.char_indices().nth(max_chars).map(|(i, _)| i);
    let head = &s[..cut.unwrap_or(s.len())];

    if cut.is_none() && !head.contains(['\n', '\r']) {
        return Cow::Borrowed(head);
    }

    let mut out = head.replace(['\n', '\r'], " ");
    if cut.is_some() {
        out.push('…');
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_is_borrowed() {
        assert!(matches!(log_preview("hello", 10), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_preview_exact_length() {
        assert_eq!(log_preview("hello", 5), "hello");
    }

    #[test]
    fn test_preview_long_is_cut() {
        assert_eq!(log_preview("hello world", 5), "hello…");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        assert_eq!(log_preview("مرحبا بكم", 5), "مرحبا…");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(log_preview("a\nb\r\nc", 10), "a b  c");
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(log_preview("", 5), "");
        assert_eq!(log_preview("hello", 0), "…");
    }
}
