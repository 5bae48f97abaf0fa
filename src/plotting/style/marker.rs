//! Plot marks.

use serde::Deserialize;
use std::fmt;

/// pgfplots mark shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Filled disc (`*`)
    Dot,
    Circle,
    Plus,
    Bar,
    Asterisk,
    Cross,
    Diamond,
    Triangle,
    Pentagon,
    Square,
    /// Any other mark name from the plotmarks library
    Custom(String),
}

impl Marker {
    /// Find the first marker character of a format string, checked in the
    /// order `.`, `o`, `+`, `|`, `*`, `x`, `d`, `^`, `p`.
    pub fn from_format(format: &str) -> Option<Self> {
        const MARKS: [(char, Marker); 9] = [
            ('.', Marker::Dot),
            ('o', Marker::Circle),
            ('+', Marker::Plus),
            ('|', Marker::Bar),
            ('*', Marker::Asterisk),
            ('x', Marker::Cross),
            ('d', Marker::Diamond),
            ('^', Marker::Triangle),
            ('p', Marker::Pentagon),
        ];
        MARKS
            .iter()
            .find(|(c, _)| format.contains(*c))
            .map(|(_, marker)| marker.clone())
    }

    /// The pgfplots `mark=` value.
    pub fn to_pgf(&self) -> &str {
        match self {
            Marker::Dot => "*",
            Marker::Circle => "o",
            Marker::Plus => "+",
            Marker::Bar => "|",
            Marker::Asterisk => "asterisk",
            Marker::Cross => "x",
            Marker::Diamond => "diamond",
            Marker::Triangle => "triangle",
            Marker::Pentagon => "pentagon",
            Marker::Square => "square",
            Marker::Custom(name) => name,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_pgf())
    }
}
