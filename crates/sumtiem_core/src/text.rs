//! Fixed-width label wrapping.
//!
//! # Invariants
//! - Widths are counted in `char`s, not bytes.
//! - No wrapped line is longer than the requested width.
//! - Token order is preserved; only whitespace is normalized.

/// Marker appended to tokens cut at the line width.
pub const ELLIPSIS: char = '…';

/// Greedily wraps `text` into lines of at most `max_chars` characters.
///
/// Tokens longer than the width are cut to `max_chars - 1` characters plus
/// [`ELLIPSIS`]. Empty input yields one empty line. A width below 1 is
/// treated as 1.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let width = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0usize;

    for raw in text.split_whitespace() {
        let token = fit_token(raw, width);
        let len = token.chars().count();
        if used > 0 && used + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push(' ');
            used += 1;
        }
        current.push_str(&token);
        used += len;
    }
    lines.push(current);
    lines
}

fn fit_token(token: &str, width: usize) -> String {
    if token.chars().count() <= width {
        return token.to_string();
    }
    let mut cut: String = token.chars().take(width - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

/// Wrapped label with height metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    lines: Vec<String>,
}

impl TextBox {
    pub fn new(text: &str, max_chars: usize) -> Self {
        Self {
            lines: wrap(text, max_chars),
        }
    }

    /// Inserts an unwrapped line above the wrapped text.
    pub fn prepend(&mut self, line: impl Into<String>) {
        self.lines.insert(0, line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Rendered height: `floor(lines * font_size * line_height)`.
    pub fn height(&self, font_size: u32, line_height: f64) -> u32 {
        (self.lines.len() as f64 * f64::from(font_size) * line_height).floor() as u32
    }
}
