//! Shell export formatting.
//!
//! Renders decrypted values as POSIX `export KEY="value"` lines that can be
//! passed to `eval` or sourced.

use zeroize::Zeroizing;

/// Decrypted key-value pairs rendered as shell exports.
///
/// Keys are uppercased when rendered. Pair order is preserved.
#[derive(Debug, Default)]
pub struct Exports {
    entries: Vec<(String, Zeroizing<String>)>,
}

impl Exports {
    /// Create an empty set of exports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn push(&mut self, key: &str, value: Zeroizing<String>) {
        self.entries.push((key.to_string(), value));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all pairs, one `export` line each.
    pub fn render(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::new());
        for (key, value) in &self.entries {
            out.push_str(&export_line(key, value));
            out.push('\n');
        }
        out
    }
}

/// A single `export KEY="value"` line, without the trailing newline.
pub fn export_line(key: &str, value: &str) -> String {
    format!("export {}=\"{}\"", key.to_uppercase(), escape_double_quoted(value))
}

/// Escape the characters that keep their meaning inside shell double quotes.
///
/// Newlines stay literal; a double-quoted shell string may span lines.
fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '`' => escaped.push_str("\\`"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
