//! Axis configuration.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::plotting::error::PlotError;

/// Placement of an axis line (`axis x line=...`, `axis y line=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisLine {
    Box,
    Top,
    Middle,
    Center,
    Bottom,
    Left,
    Right,
    None,
}

impl AxisLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisLine::Box => "box",
            AxisLine::Top => "top",
            AxisLine::Middle => "middle",
            AxisLine::Center => "center",
            AxisLine::Bottom => "bottom",
            AxisLine::Left => "left",
            AxisLine::Right => "right",
            AxisLine::None => "none",
        }
    }
}

impl fmt::Display for AxisLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisLine {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "box" => Ok(AxisLine::Box),
            "top" => Ok(AxisLine::Top),
            "middle" => Ok(AxisLine::Middle),
            "center" => Ok(AxisLine::Center),
            "bottom" => Ok(AxisLine::Bottom),
            "left" => Ok(AxisLine::Left),
            "right" => Ok(AxisLine::Right),
            "none" => Ok(AxisLine::None),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown axis line placement '{}'",
                other
            ))),
        }
    }
}

/// Every recognised axis option with its default.
///
/// Position and size are in centimetres of figure space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: Option<f64>,
    pub ymax: Option<f64>,
    pub xtick: Vec<f64>,
    pub ytick: Vec<f64>,
    pub xticklabels: Vec<String>,
    pub yticklabels: Vec<String>,
    /// Equal unit length on both axes
    pub equal: bool,
    /// Major grid lines
    pub grid: bool,
    pub axis_x_line: Option<AxisLine>,
    pub axis_y_line: Option<AxisLine>,
    pub xbar: bool,
    pub ybar: bool,
    pub stacked: bool,
    /// Raw options inserted after the size options
    pub extra_options: Vec<String>,
}

impl AxisConfig {
    /// Create a new axis configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of the lower left corner.
    pub fn at(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Set the axis size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = label.into();
        self
    }

    pub fn ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = label.into();
        self
    }

    /// Set all four limits at once.
    pub fn limits(mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        self.xmin = Some(xmin);
        self.xmax = Some(xmax);
        self.ymin = Some(ymin);
        self.ymax = Some(ymax);
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn equal(mut self, equal: bool) -> Self {
        self.equal = equal;
        self
    }

    /// Vertical bars (`ybar`), optionally stacked.
    pub fn ybar(mut self, stacked: bool) -> Self {
        self.ybar = true;
        self.stacked = stacked;
        self
    }

    /// Horizontal bars (`xbar`), optionally stacked.
    pub fn xbar(mut self, stacked: bool) -> Self {
        self.xbar = true;
        self.stacked = stacked;
        self
    }

    /// Add a raw pgfplots option.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.extra_options.push(option.into());
        self
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            left: 0.0,
            top: 0.0,
            width: 8.0,
            height: 7.0,
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            xmin: None,
            xmax: None,
            ymin: None,
            ymax: None,
            xtick: Vec::new(),
            ytick: Vec::new(),
            xticklabels: Vec::new(),
            yticklabels: Vec::new(),
            equal: false,
            grid: false,
            axis_x_line: None,
            axis_y_line: None,
            xbar: false,
            ybar: false,
            stacked: false,
            extra_options: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AxisConfig::default();
        assert_eq!((config.width, config.height), (8.0, 7.0));
        assert_eq!(config.xmin, None);
        assert!(config.xtick.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AxisConfig =
            serde_json::from_str(r#"{"title": "Loss", "xmax": 10, "axis_x_line": "bottom"}"#)
                .unwrap();
        assert_eq!(config.title, "Loss");
        assert_eq!(config.xmax, Some(10.0));
        assert_eq!(config.axis_x_line, Some(AxisLine::Bottom));
        assert_eq!(config.width, 8.0);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result: Result<AxisConfig, _> = serde_json::from_str(r#"{"xlim": [0, 1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_axis_line_parse() {
        assert_eq!("Middle".parse::<AxisLine>().unwrap(), AxisLine::Middle);
        assert!("diagonal".parse::<AxisLine>().is_err());
    }
}
