//! Plot styles and the short-hand format strings that produce them.

use serde::Deserialize;

use crate::plotting::options::StyleOptions;
use crate::plotting::style::{Color, LineStyle, Marker};

/// Style of a single plot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotStyle {
    pub color: Option<Color>,
    pub marker: Option<Marker>,
    pub line_style: Option<LineStyle>,
    /// Line width in points
    pub line_width: Option<f64>,
    /// Raw options appended after the generated ones
    pub extra_options: Vec<String>,
}

impl PlotStyle {
    /// Create an empty style (pgfplots cycle list applies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a format string such as `"r."`, `"b--"` or `"ko:"`.
    pub fn from_format(format: &str) -> Self {
        Self::default().with_format(format)
    }

    /// Fill every unset field from a format string.
    ///
    /// Fields already set take precedence. A marker without any line style
    /// yields `only marks`.
    pub fn with_format(mut self, format: &str) -> Self {
        if self.color.is_none() {
            self.color = Color::from_format(format);
        }
        if self.marker.is_none() {
            self.marker = Marker::from_format(format);
        }
        if self.line_style.is_none() {
            self.line_style = LineStyle::from_format(format);
        }
        if self.marker.is_some() && self.line_style.is_none() {
            self.line_style = Some(LineStyle::OnlyMarks);
        }
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Options in the order color, mark, line style, line width, extras.
    pub fn to_options(&self) -> StyleOptions {
        let mut options = StyleOptions::new();
        if let Some(ref color) = self.color {
            options.push_kv("color", color);
        }
        if let Some(ref marker) = self.marker {
            options.push_kv("mark", marker);
        }
        if let Some(style) = self.line_style {
            options.push(style.to_pgf());
        }
        if let Some(width) = self.line_width {
            options.push_kv("line width", format!("{}pt", width));
        }
        options.extend(self.extra_options.iter().cloned());
        options
    }
}
