//! Fixed-count text wrapper for the free-text box.
//!
//! Wrapping is by character count only: no word boundaries, no glyph widths. The box
//! is sized for a known number of full-width characters per line, and callers rely on
//! that count. A `\n` flushes early and stays at the end of the flushed line.

/// Splits `text` into display lines of at most `char_limit` characters.
pub fn wrap_fixed(text: &str, char_limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for c in text.chars() {
        current.push(c);
        count += 1;
        if count >= char_limit || c == '\n' {
            lines.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
