//! Utility functions for safe string slicing
//!
//! Record spans are byte offsets. Spans coming from another process may land
//! inside a multi-byte character, so slicing goes through these helpers
//! instead of indexing directly.

/// Move `index` back to the nearest UTF-8 char boundary at or before it.
///
/// Indexes past the end are clamped to `s.len()`.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Slice `s[start..end]` without panicking.
///
/// Both ends are clamped to the string length and moved back to char
/// boundaries; an inverted span yields the empty string.
///
/// # Examples
/// ```
/// use srcdoc::utils::slice_span;
///
/// assert_eq!(slice_span("hello world", 6, 11), "world");
/// assert_eq!(slice_span("hello", 3, 99), "lo");
/// assert_eq!(slice_span("hello", 4, 2), "");
/// ```
pub fn slice_span(s: &str, start: usize, end: usize) -> &str {
    let end = floor_char_boundary(s, end);
    let start = floor_char_boundary(s, start.min(end));
    &s[start..end]
}
