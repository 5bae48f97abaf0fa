//! Color definitions for pgfplots output.

use serde::Deserialize;
use std::fmt;

/// A color usable in `\addplot` and `\node` options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// xcolor name or expression (e.g., "red", "blue!50!black")
    Named(String),
}

impl Color {
    /// Create a new RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    /// Find the first color letter of a format string, checked in the order
    /// r, g, b, c, m, y, k, w.
    pub fn from_format(format: &str) -> Option<Self> {
        const LETTERS: [(char, &str); 8] = [
            ('r', "red"),
            ('g', "green"),
            ('b', "blue"),
            ('c', "cyan"),
            ('m', "magenta"),
            ('y', "yellow"),
            ('k', "black"),
            ('w', "white"),
        ];
        LETTERS
            .iter()
            .find(|(letter, _)| format.contains(*letter))
            .map(|(_, name)| Color::Named(name.to_string()))
    }

    /// Convert the color to an xcolor expression.
    pub fn to_pgf(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("{{rgb,255:red,{};green,{};blue,{}}}", r, g, b),
            Color::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pgf())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}
