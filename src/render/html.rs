//! Minimal escaping-by-default HTML assembly.
//!
//! Dynamic values (photo titles, URLs) only reach the output through
//! [`Markup::attr`], which escapes unconditionally. [`Markup::raw`] is
//! reserved for static markup literals.

use std::borrow::Cow;

/// Escape text for safe interpolation into HTML content or attribute
/// values (double-quoted).
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Accumulates an HTML fragment.
#[derive(Debug, Default)]
pub struct Markup {
    out: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a static markup literal, unescaped.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.out.push_str(fragment);
        self
    }

    /// Append a dynamic attribute value, escaped.
    pub fn attr(&mut self, value: &str) -> &mut Self {
        self.out.push_str(&escape(value));
        self
    }

    /// Take the assembled fragment.
    pub fn finish(self) -> String {
        self.out
    }
}
