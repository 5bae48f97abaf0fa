//! Line plot implementation.

use log::debug;

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{Bounds, Renderable};
use crate::plotting::plot::PlotStyle;

/// A line plot connecting data points (`\addplot coordinates`).
#[derive(Debug, Clone)]
pub struct LinePlot {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates
    pub y: Vec<f64>,
    /// Color, marks and line style
    pub style: PlotStyle,
}

impl LinePlot {
    /// Create a new line plot from x and y data.
    ///
    /// Extra values of the longer sequence are ignored.
    pub fn new(x: impl IntoPlotData, y: impl IntoPlotData) -> Self {
        LinePlot {
            x: x.into_plot_data(),
            y: y.into_plot_data(),
            style: PlotStyle::default(),
        }
    }

    /// Plot `y` against `1..=y.len()`.
    pub fn from_y(y: impl IntoPlotData) -> Self {
        let y = y.into_plot_data();
        let x = (1..=y.len()).map(|i| i as f64).collect();
        LinePlot {
            x,
            y,
            style: PlotStyle::default(),
        }
    }

    /// Set the complete style.
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Apply a format string (e.g. `"r--"`) to unset style fields.
    pub fn format(mut self, format: &str) -> Self {
        self.style = self.style.with_format(format);
        self
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| (x, y))
    }
}

impl Renderable for LinePlot {
    fn render(&self) -> String {
        let options = self.style.to_options();
        let mut tex = if options.is_empty() {
            "\\addplot coordinates {\n".to_string()
        } else {
            format!("\\addplot[{}] coordinates {{\n", options.to_inline())
        };

        let mut written = 0;
        for (x, y) in self.points() {
            tex.push_str(&format!("\t({},{})\n", x, y));
            written += 1;
        }
        let skipped = self.x.len().min(self.y.len()) - written;
        if skipped > 0 {
            debug!("Skipped {} non-finite points in line plot", skipped);
        }

        tex.push_str("};\n");
        tex
    }

    fn limits(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for (x, y) in self.points() {
            bounds.include_point(x, y);
        }
        bounds
    }
}
