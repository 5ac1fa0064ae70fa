//! Highlighting of the matched span in a display string.
//!
//! Highlighting is independent of scoring: it only looks for the query (or,
//! failing that, its first usable word) as a case-insensitive substring of
//! the original text. All dynamic text is HTML-escaped, and the only markup
//! ever emitted is a single [`MARK_OPEN`]/[`MARK_CLOSE`] pair.

use std::borrow::Cow;
use std::ops::Range;

use crate::options::MIN_TOKEN_CHARS;

/// Opening tag wrapped around the highlighted span.
pub const MARK_OPEN: &str = "<mark>";
/// Closing tag wrapped around the highlighted span.
pub const MARK_CLOSE: &str = "</mark>";

/// Escape `&`, `<` and `>` for safe inclusion in HTML text content.
///
/// Returns the input borrowed when nothing needs escaping.
///
/// ```
/// use twinsearch::escape_html;
///
/// assert_eq!(escape_html("Smith & Sons <Ltd>"), "Smith &amp; Sons &lt;Ltd&gt;");
/// assert!(matches!(escape_html("plain"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr::memchr3(b'&', b'<', b'>', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Byte range of `text` to highlight for `query`, if any.
///
/// Looks for the whole query first. If it is absent, tries each
/// whitespace-separated word of at least two characters in order and returns
/// the first one found. Matching is ASCII case-insensitive, so the returned
/// range always lies on character boundaries of `text`.
///
/// ```
/// use twinsearch::highlight_span;
///
/// assert_eq!(highlight_span("Meridian Capital", "meridian"), Some(0..8));
/// // "meridan" is absent, "capital" is the first word that is found.
/// assert_eq!(highlight_span("Meridian Capital", "meridan capital x"), Some(9..16));
/// assert_eq!(highlight_span("Meridian Capital", "zz"), None);
/// ```
pub fn highlight_span(text: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }

    let text_lower = text.to_ascii_lowercase();
    let query_lower = query.to_ascii_lowercase();

    if let Some(start) = text_lower.find(&query_lower) {
        return Some(start..start + query_lower.len());
    }

    query_lower
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .find_map(|word| text_lower.find(word).map(|start| start..start + word.len()))
}

/// Render `text` as escaped HTML with the span matching `query` marked.
///
/// Falls back to the fully escaped text when nothing matches.
///
/// ```
/// use twinsearch::highlight;
///
/// assert_eq!(highlight("Meridian Capital", "meridian"), "<mark>Meridian</mark> Capital");
/// assert_eq!(highlight("A&B <Co>", "b <c"), "A&amp;<mark>B &lt;C</mark>o&gt;");
/// assert_eq!(highlight("A&B", "zz"), "A&amp;B");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    let Some(span) = highlight_span(text, query) else {
        return escape_html(text).into_owned();
    };

    let before = escape_html(&text[..span.start]);
    let matched = escape_html(&text[span.clone()]);
    let after = escape_html(&text[span.end..]);

    let mut out = String::with_capacity(
        before.len() + matched.len() + after.len() + MARK_OPEN.len() + MARK_CLOSE.len(),
    );
    out.push_str(&before);
    out.push_str(MARK_OPEN);
    out.push_str(&matched);
    out.push_str(MARK_CLOSE);
    out.push_str(&after);
    out
}
