//! Legend configuration and rendering.

use serde::Deserialize;

use crate::plotting::options::{escape, indent, round_to, StyleOptions};

/// Distance between a positioned legend and the axis border, in centimetres.
const BORDER_OFFSET: f64 = 0.1;

/// Legend of an axis.
///
/// The legend renders to an option string that becomes part of the owning
/// axis' option block rather than to a block of its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Legend {
    /// Legend entries, one per plot in insertion order
    pub entries: Vec<String>,
    /// Explicit anchor point in normalized axis coordinates
    pub at: Option<(f64, f64)>,
    /// Explicit anchor keyword (e.g. `north east`)
    pub anchor: Option<String>,
    /// Location hint combining north/south/east/west/outer; takes precedence
    /// over `at` and `anchor`
    pub location: Option<String>,
    /// Cell text alignment
    pub align: String,
}

impl Legend {
    /// Create a new legend with the given entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Legend {
            entries: entries.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the location hint (e.g. `"north east outer"`).
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set an explicit anchor point.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.at = Some((x, y));
        self
    }

    /// Set an explicit anchor keyword.
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Set the cell text alignment.
    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    /// Render the legend options for an axis of the given size.
    pub fn render(&self, axis_width: f64, axis_height: f64) -> String {
        let entries: Vec<String> = self.entries.iter().map(|e| escape(e)).collect();

        let mut options = StyleOptions::new();
        options.push_braced("legend entries", entries.join(","));
        options.push_kv("legend cell align", &self.align);

        let mut cell_options = StyleOptions::new();
        if let Some(ref location) = self.location {
            let ((left, bottom), anchor) = place(location, axis_width, axis_height);
            cell_options.push(format!("at={{({},{})}}", left, bottom));
            cell_options.push_kv("anchor", anchor.join(" "));
        } else {
            if let Some((x, y)) = self.at {
                cell_options.push(format!("at={{({},{})}}", x, y));
            }
            if let Some(ref anchor) = self.anchor {
                cell_options.push_kv("anchor", anchor);
            }
        }

        if !cell_options.is_empty() {
            options.push(format!(
                "legend style={{\n{}\n}}",
                indent(&cell_options.to_block(), 1)
            ));
        }

        options.to_block()
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            at: None,
            anchor: None,
            location: None,
            align: "left".to_string(),
        }
    }
}

/// Resolve a location hint into a rounded `(left, bottom)` point and the
/// anchor tokens, vertical token first.
///
/// "outer" snaps the vertical offset to the nearest border but only moves
/// the horizontal offset past the border.
fn place(location: &str, width: f64, height: f64) -> ((f64, f64), Vec<&'static str>) {
    let loc = location.to_lowercase();
    let outer = loc.contains("outer");
    let mut anchor = Vec::with_capacity(2);
    let (mut left, mut bottom) = (0.5, 0.5);

    if loc.contains("north") {
        bottom = 1.0 - BORDER_OFFSET / height;
        anchor.push("north");
    } else if loc.contains("south") {
        bottom = BORDER_OFFSET / height;
        anchor.push("south");
    }

    if outer && (loc.contains("north") || loc.contains("south")) {
        bottom = bottom.round_ties_even();
    }

    if loc.contains("west") {
        if outer {
            left = -BORDER_OFFSET / width;
            anchor.push("east");
        } else {
            left = BORDER_OFFSET / width;
            anchor.push("west");
        }
    } else if loc.contains("east") {
        if outer {
            left = 1.0 + BORDER_OFFSET / width;
            anchor.push("west");
        } else {
            left = 1.0 - BORDER_OFFSET / width;
            anchor.push("east");
        }
    }

    ((round_to(left, 4), round_to(bottom, 4)), anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_and_alignment() {
        let legend = Legend::new(["train", "test"]);
        assert_eq!(
            legend.render(8.0, 7.0),
            "legend entries={train,test},\nlegend cell align=left"
        );
    }

    #[test]
    fn test_north_east_inside() {
        let ((left, bottom), anchor) = place("north east", 8.0, 7.0);
        assert_eq!(anchor, vec!["north", "east"]);
        assert_eq!(bottom, round_to(1.0 - 0.1 / 7.0, 4));
        assert_eq!(left, round_to(1.0 - 0.1 / 8.0, 4));
        assert_eq!((left, bottom), (0.9875, 0.9857));
    }

    #[test]
    fn test_north_east_outer_snaps_vertical() {
        let ((left, bottom), anchor) = place("North East Outer", 8.0, 7.0);
        assert_eq!(anchor, vec!["north", "west"]);
        assert_eq!(bottom, 1.0);
        assert_eq!(left, round_to(1.0 + 0.1 / 8.0, 4));
    }

    #[test]
    fn test_south_west_outer() {
        let ((left, bottom), anchor) = place("south west outer", 10.0, 4.0);
        assert_eq!(anchor, vec!["south", "east"]);
        assert_eq!(bottom, 0.0);
        assert_eq!(left, -0.01);
    }

    #[test]
    fn test_horizontal_only_keeps_vertical_midpoint() {
        let ((left, bottom), anchor) = place("west outer", 8.0, 7.0);
        assert_eq!(anchor, vec!["east"]);
        assert_eq!(bottom, 0.5);
        assert_eq!(left, -0.0125);

        let ((left, bottom), anchor) = place("center", 8.0, 7.0);
        assert!(anchor.is_empty());
        assert_eq!((left, bottom), (0.5, 0.5));
    }

    #[test]
    fn test_location_rendering() {
        let legend = Legend::new(["a"]).location("north east");
        assert_eq!(
            legend.render(8.0, 7.0),
            "legend entries={a},\nlegend cell align=left,\nlegend style={\n\tat={(0.9875,0.9857)},\n\tanchor=north east\n}"
        );
    }

    #[test]
    fn test_location_overrides_explicit_anchor() {
        let legend = Legend::new(["a"])
            .at(0.2, 0.3)
            .anchor("center")
            .location("south");
        let tex = legend.render(8.0, 10.0);
        assert!(tex.contains("at={(0.5,0.01)}"));
        assert!(tex.contains("anchor=south"));
        assert!(!tex.contains("center"));
    }

    #[test]
    fn test_explicit_at_and_anchor() {
        let legend = Legend::new(["a"]).at(0.2, 0.3).anchor("south west").align("right");
        assert_eq!(
            legend.render(8.0, 7.0),
            "legend entries={a},\nlegend cell align=right,\nlegend style={\n\tat={(0.2,0.3)},\n\tanchor=south west\n}"
        );
    }

    #[test]
    fn test_deserialize() {
        let legend: Legend =
            serde_json::from_str(r#"{"entries": ["x", "y"], "location": "south east"}"#).unwrap();
        assert_eq!(legend.entries, vec!["x", "y"]);
        assert_eq!(legend.align, "left");
    }
}
