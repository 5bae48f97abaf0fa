//! Text annotations placed in data coordinates.

use serde::Deserialize;

use crate::plotting::element::{Bounds, Renderable};
use crate::plotting::options::StyleOptions;
use crate::plotting::style::Color;

/// A text node anchored at a data point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Text {
    /// The text content (LaTeX)
    pub content: String,
    pub x: f64,
    pub y: f64,
    /// Node anchor, e.g. `south west`
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    /// Rotation angle in degrees
    #[serde(default)]
    pub rotation: f64,
}

impl Text {
    /// Create a new text element.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            anchor: None,
            color: None,
            rotation: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the rotation angle in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

impl Renderable for Text {
    fn render(&self) -> String {
        let mut options = StyleOptions::new();
        if let Some(ref anchor) = self.anchor {
            options.push_kv("anchor", anchor);
        }
        if let Some(ref color) = self.color {
            options.push(color.to_pgf());
        }
        if self.rotation != 0.0 {
            options.push_kv("rotate", self.rotation);
        }

        let node = if options.is_empty() {
            "\\node".to_string()
        } else {
            format!("\\node[{}]", options.to_inline())
        };
        format!("{} at (axis cs:{},{}) {{{}}};\n", node, self.x, self.y, self.content)
    }

    fn limits(&self) -> Bounds {
        Bounds::point(self.x, self.y)
    }
}
