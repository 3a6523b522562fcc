// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Text shaping helpers.
//!
//! Both helpers are total: absent or nonsensical input collapses into an empty
//! string instead of an error. All lengths are counted in Unicode scalar
//! values, never bytes, so nothing here can split a code point in half.

/// Marker appended to truncated text when the caller does not supply one.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Truncate text to a maximum length, marking the cut with an ellipsis.
///
/// The ellipsis counts against `max_len`, so the result never holds more
/// than `max_len` characters. Text that already fits is returned as-is. If
/// the ellipsis itself cannot fit, then the ellipsis is what gets cut.
///
/// An absent `ellipsis` means [`DEFAULT_ELLIPSIS`].
///
/// # Examples
///
/// ```
/// # use textfmt::truncate;
/// assert_eq!(truncate(Some("hello world"), 8, None), "hello...");
/// assert_eq!(truncate(Some("hello world"), 8, Some("…")), "hello w…");
/// assert_eq!(truncate(Some("hello world"), 2, None), "..");
/// assert_eq!(truncate(None, 8, None), "");
/// ```
pub fn truncate(text: Option<&str>, max_len: i64, ellipsis: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    // Negative lengths mean there is no room for anything.
    if max_len < 0 {
        return String::new();
    }
    let max_len = usize::try_from(max_len).unwrap_or(usize::MAX);

    if text.chars().count() <= max_len {
        return text.to_owned();
    }

    let ellipsis = ellipsis.unwrap_or(DEFAULT_ELLIPSIS);
    match max_len.checked_sub(ellipsis.chars().count()) {
        Some(kept) if kept > 0 => text.chars().take(kept).chain(ellipsis.chars()).collect(),
        _ => ellipsis.chars().take(max_len).collect(),
    }
}

/// Upper-case the first character of text.
///
/// Everything after the first character is left exactly as given. Uses the
/// full Unicode upper-case mapping, so a single leading character may expand
/// into several, e.g., "ß" becomes "SS".
///
/// # Examples
///
/// ```
/// # use textfmt::capitalize;
/// assert_eq!(capitalize(Some("hello")), "Hello");
/// assert_eq!(capitalize(Some("hELLO")), "HELLO");
/// assert_eq!(capitalize(None), "");
/// ```
pub fn capitalize(text: Option<&str>) -> String {
    let mut chars = text.unwrap_or_default().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
