//! Title derivation

/// Longest first line kept verbatim
pub const MAX_TITLE_CHARS: usize = 50;

/// Characters kept before the ellipsis when a line is too long
const TRUNCATED_CHARS: usize = 47;

const ELLIPSIS: &str = "...";

/// Derive a display title from the first line of `text`.
///
/// Returns `fallback` when the first line is empty or whitespace only.
/// Lengths are counted in chars, so multi-byte text is never split.
pub fn derive_title(text: &str, fallback: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();

    if first_line.trim().is_empty() {
        return fallback.to_string();
    }

    if first_line.chars().count() <= MAX_TITLE_CHARS {
        return first_line.to_string();
    }

    let mut title: String = first_line.chars().take(TRUNCATED_CHARS).collect();
    title.push_str(ELLIPSIS);
    title
}
