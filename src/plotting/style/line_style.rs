//! Line styling options.

use serde::Deserialize;
use std::fmt;

/// pgfplots line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    DenselyDashed,
    Dotted,
    DenselyDotted,
    /// Marks without connecting lines
    OnlyMarks,
}

impl LineStyle {
    /// Parse the line part of a format string, longest pattern first.
    pub fn from_format(format: &str) -> Option<Self> {
        if format.contains("---") {
            Some(LineStyle::DenselyDashed)
        } else if format.contains("--") {
            Some(LineStyle::Dashed)
        } else if format.contains('-') {
            Some(LineStyle::Solid)
        } else if format.contains(':') {
            Some(LineStyle::DenselyDotted)
        } else {
            None
        }
    }

    /// The bare pgfplots option for this style.
    pub fn to_pgf(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::DenselyDashed => "densely dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DenselyDotted => "densely dotted",
            LineStyle::OnlyMarks => "only marks",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_pgf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_pattern_wins() {
        assert_eq!(LineStyle::from_format("r---"), Some(LineStyle::DenselyDashed));
        assert_eq!(LineStyle::from_format("b--o"), Some(LineStyle::Dashed));
        assert_eq!(LineStyle::from_format("-"), Some(LineStyle::Solid));
        assert_eq!(LineStyle::from_format("k:"), Some(LineStyle::DenselyDotted));
        assert_eq!(LineStyle::from_format("r."), None);
    }
}
