//! Escaping of reserved XML characters in leaf text.
//!
//! The five reserved characters are replaced in a single left-to-right scan,
//! so an inserted `&lt;` is never revisited and turned into `&amp;lt;`.
//! Input that is already escaped is escaped again: `sanitize("&lt;")` is
//! `&amp;lt;`.

use std::borrow::Cow;

/// Maps a reserved character to its entity.
#[inline]
fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '\'' => Some("&apos;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

#[inline]
fn needs_escape(s: &str) -> bool {
    s.contains(|ch: char| entity(ch).is_some())
}

/// Escapes `<`, `>`, `&`, `'` and `"` in `s`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::sanitize;
///
/// assert_eq!(sanitize("<a>&'\""), "&lt;a&gt;&amp;&apos;&quot;");
/// assert_eq!(sanitize("plain"), "plain");
/// ```
#[inline]
#[must_use]
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if !needs_escape(s) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + s.len() / 8);
    sanitize_to(s, &mut result);
    Cow::Owned(result)
}

/// Escapes `s` and appends the result to `out`.
pub fn sanitize_to(s: &str, out: &mut String) {
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        if let Some(escaped) = entity(ch) {
            // reserved chars are ASCII, so `i` and `i + 1` are char boundaries
            out.push_str(&s[start..i]);
            out.push_str(escaped);
            start = i + 1;
        }
    }

    out.push_str(&s[start..]);
}
