//! Ordered pgfplots option lists and markup text helpers.

use std::fmt;

/// Ordered list of already-formatted `key=value` (or bare) options.
///
/// Declaration order is preserved on output; duplicates are kept and left
/// for pgfplots to resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOptions {
    items: Vec<String>,
}

impl StyleOptions {
    /// Create an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preformatted option (e.g. `scale only axis`).
    pub fn push(&mut self, option: impl Into<String>) {
        self.items.push(option.into());
    }

    /// Append `key=value`.
    pub fn push_kv(&mut self, key: &str, value: impl fmt::Display) {
        self.items.push(format!("{}={}", key, value));
    }

    /// Append `key={value}`.
    pub fn push_braced(&mut self, key: &str, value: impl fmt::Display) {
        self.items.push(format!("{}={{{}}}", key, value));
    }

    /// Append `key={a,b,c}` unless `values` is empty.
    pub fn push_list<T: fmt::Display>(&mut self, key: &str, values: &[T]) {
        if !values.is_empty() {
            self.push_braced(key, join(values, ","));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// One option per line, as used inside `[...]` blocks.
    pub fn to_block(&self) -> String {
        self.items.join(",\n")
    }

    /// All options on one line, as used for `\addplot[...]`.
    pub fn to_inline(&self) -> String {
        self.items.join(",")
    }
}

impl<S: Into<String>> Extend<S> for StyleOptions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for StyleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_block())
    }
}

/// Join displayable values with a separator.
pub fn join<T: fmt::Display>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Prefix every non-empty line of `text` with `levels` tabs.
pub fn indent(text: &str, levels: usize) -> String {
    let prefix = "\t".repeat(levels);
    let mut out = String::with_capacity(text.len() + levels * 8);
    for line in text.split_inclusive('\n') {
        if !line.trim_end_matches('\n').is_empty() {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    out
}

/// Escape a label for use inside a comma-separated pgfplots list.
///
/// `%`, `&` and `#` are escaped; labels containing `,` or `=` are wrapped in
/// braces so they stay a single list entry. Math (`$...$`) passes through.
pub fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '%' | '&' | '#' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    if escaped.contains(',') || escaped.contains('=') {
        format!("{{{}}}", escaped)
    } else {
        escaped
    }
}

/// Round half-to-even to the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let mut opts = StyleOptions::new();
        opts.push("scale only axis");
        opts.push_kv("width", "8cm");
        opts.push_braced("title", "Results");
        opts.push_kv("width", "4cm");
        assert_eq!(
            opts.to_block(),
            "scale only axis,\nwidth=8cm,\ntitle={Results},\nwidth=4cm"
        );
        assert_eq!(opts.len(), 4);
    }

    #[test]
    fn test_empty_list_skipped() {
        let mut opts = StyleOptions::new();
        opts.push_list::<f64>("xtick", &[]);
        assert!(opts.is_empty());
        opts.push_list("xtick", &[1.0, 2.5, 3.0]);
        assert_eq!(opts.to_inline(), "xtick={1,2.5,3}");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb\n", 2), "\t\ta\n\n\t\tb\n");
        assert_eq!(indent("a", 1), "\ta");
        assert_eq!(indent("", 3), "");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("50% & more"), "50\\% \\& more");
        assert_eq!(escape("a, b"), "{a, b}");
        assert_eq!(escape("$x^2$"), "$x^2$");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.987_654, 4), 0.9877);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(0.985_714_285, 0), 1.0);
    }
}
