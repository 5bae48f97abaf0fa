//! Axis (plot region) implementation.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::plotting::element::{AxisConfig, AxisLine, Bounds, Legend, Renderable};
use crate::plotting::error::PlotError;
use crate::plotting::options::{indent, StyleOptions};

/// State transitions behind `axis('equal')`, `axis('tight')` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Lock the aspect ratio to equal unit lengths
    Equal,
    /// Shrink width and height to the smaller of the two
    Square,
    /// Clear all four limits
    Auto,
    /// Set the limits to the union of the children's bounds
    Tight,
    /// Axis lines through the center of the plot
    Center,
    /// Same as `Center`
    Origin,
}

impl FromStr for AxisMode {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(AxisMode::Equal),
            "square" => Ok(AxisMode::Square),
            "auto" => Ok(AxisMode::Auto),
            "tight" => Ok(AxisMode::Tight),
            "center" => Ok(AxisMode::Center),
            "origin" => Ok(AxisMode::Origin),
            other => Err(PlotError::InvalidConfig(format!(
                "unknown axis mode '{}'",
                other
            ))),
        }
    }
}

/// A rectangular plot region with its own coordinate system.
pub struct Axis {
    /// Position, size, labels, limits, ticks and flags
    pub config: AxisConfig,
    /// Plots and annotations in render order
    children: Vec<Box<dyn Renderable>>,
    legend: Option<Legend>,
}

impl Axis {
    /// Create a new axis from a configuration.
    pub fn new(config: AxisConfig) -> Self {
        Axis {
            config,
            children: Vec::new(),
            legend: None,
        }
    }

    /// Add a plot or annotation.
    pub fn add_child(&mut self, child: impl Renderable + 'static) {
        self.children.push(Box::new(child));
    }

    /// Add an already boxed plot or annotation.
    pub fn add_boxed_child(&mut self, child: Box<dyn Renderable>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Renderable>] {
        &self.children
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Attach a legend, returning the one it replaces.
    pub fn set_legend(&mut self, legend: Legend) -> Option<Legend> {
        self.legend.replace(legend)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.config.title = title.into();
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.xlabel = label.into();
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.ylabel = label.into();
        self
    }

    pub fn set_xtick(&mut self, ticks: Vec<f64>) -> &mut Self {
        self.config.xtick = ticks;
        self
    }

    pub fn set_ytick(&mut self, ticks: Vec<f64>) -> &mut Self {
        self.config.ytick = ticks;
        self
    }

    /// Set x tick labels; without x ticks, ticks become `1..=labels.len()`.
    pub fn set_xticklabels(&mut self, labels: Vec<String>) -> &mut Self {
        if self.config.xtick.is_empty() {
            self.config.xtick = default_ticks(labels.len());
        }
        self.config.xticklabels = labels;
        self
    }

    /// Set y tick labels; without y ticks, ticks become `1..=labels.len()`.
    pub fn set_yticklabels(&mut self, labels: Vec<String>) -> &mut Self {
        if self.config.ytick.is_empty() {
            self.config.ytick = default_ticks(labels.len());
        }
        self.config.yticklabels = labels;
        self
    }

    /// Set `xmin, xmax, ymin, ymax`.
    pub fn set_limits(&mut self, limits: [f64; 4]) -> &mut Self {
        let [xmin, xmax, ymin, ymax] = limits;
        self.config.xmin = Some(xmin);
        self.config.xmax = Some(xmax);
        self.config.ymin = Some(ymin);
        self.config.ymax = Some(ymax);
        self
    }

    /// Turn the grid on or off, or toggle it with `None`.
    pub fn set_grid(&mut self, value: Option<bool>) -> &mut Self {
        self.config.grid = value.unwrap_or(!self.config.grid);
        self
    }

    /// Turn the axis box on or off, or toggle it with `None`.
    ///
    /// The box counts as off while no axis line placement is set, so the
    /// toggle turns it on in that state. On sets both placements to `box`,
    /// off clears both.
    pub fn set_box(&mut self, value: Option<bool>) -> &mut Self {
        let on = value.unwrap_or(
            self.config.axis_x_line.is_none() && self.config.axis_y_line.is_none(),
        );
        if on {
            self.config.axis_x_line = Some(AxisLine::Box);
            self.config.axis_y_line = Some(AxisLine::Box);
        } else {
            self.config.axis_x_line = None;
            self.config.axis_y_line = None;
        }
        self
    }

    /// Apply an axis mode.
    pub fn apply_mode(&mut self, mode: AxisMode) -> &mut Self {
        match mode {
            AxisMode::Equal => self.config.equal = true,
            AxisMode::Square => {
                let side = self.config.width.min(self.config.height);
                self.config.width = side;
                self.config.height = side;
            }
            AxisMode::Auto => {
                self.config.xmin = None;
                self.config.xmax = None;
                self.config.ymin = None;
                self.config.ymax = None;
            }
            AxisMode::Tight => match self.limits() {
                Some(bounds) if !bounds.is_empty() => {
                    self.set_limits(bounds.to_array());
                }
                Some(_) => warn!("Tight limits skipped: no child of the axis contains data"),
                None => debug!("Tight limits skipped: axis has no children"),
            },
            AxisMode::Center | AxisMode::Origin => {
                self.config.axis_x_line = Some(AxisLine::Center);
                self.config.axis_y_line = Some(AxisLine::Middle);
            }
        }
        self
    }

    /// Union of the children's bounds, `None` without children.
    pub fn limits(&self) -> Option<Bounds> {
        if self.children.is_empty() {
            return None;
        }
        let mut bounds = Bounds::empty();
        for child in &self.children {
            bounds.include_bounds(&child.limits());
        }
        Some(bounds)
    }

    /// Options of the `axis` environment in their fixed order.
    pub fn options(&self) -> StyleOptions {
        let c = &self.config;
        let mut options = StyleOptions::new();

        options.push(format!("at={{({}, {})}}", c.left, c.top));
        options.push("scale only axis");
        options.push_kv("width", format!("{}cm", c.width));
        options.push_kv("height", format!("{}cm", c.height));
        options.extend(c.extra_options.iter().cloned());

        push_text(&mut options, "title", &c.title);
        push_number(&mut options, "xmin", c.xmin);
        push_number(&mut options, "xmax", c.xmax);
        push_number(&mut options, "ymin", c.ymin);
        push_number(&mut options, "ymax", c.ymax);
        push_text(&mut options, "xlabel", &c.xlabel);
        push_text(&mut options, "ylabel", &c.ylabel);

        if let Some(ref legend) = self.legend {
            options.push(legend.render(c.width, c.height));
        }

        if !c.xlabel.is_empty() {
            options.push("xlabel near ticks");
        }
        if !c.ylabel.is_empty() {
            options.push("ylabel near ticks");
        }
        if c.equal {
            options.push("axis equal=true");
        }
        if c.grid {
            options.push("grid=major");
        }

        options.push_list("xtick", &c.xtick);
        options.push_list("ytick", &c.ytick);
        options.push_list("xticklabels", &c.xticklabels);
        options.push_list("yticklabels", &c.yticklabels);

        if let Some(line) = c.axis_x_line {
            options.push_kv("axis x line", line);
        }
        if let Some(line) = c.axis_y_line {
            options.push_kv("axis y line", line);
        }

        let bar = match (c.ybar, c.xbar, c.stacked) {
            (true, _, true) => Some("ybar stacked"),
            (true, _, false) => Some("ybar"),
            (false, true, true) => Some("xbar stacked"),
            (false, true, false) => Some("xbar"),
            (false, false, _) => None,
        };
        if let Some(bar) = bar {
            options.push(bar);
            options.push("area legend");
        }

        options
    }

    /// Render the `axis` environment with all children.
    pub fn render(&self) -> String {
        let mut tex = format!(
            "\\begin{{axis}}[\n{}\n\t]\n",
            indent(&self.options().to_block(), 2)
        );
        for child in &self.children {
            tex.push_str(&indent(&child.render(), 1));
        }
        tex.push_str("\\end{axis}\n");
        tex
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(AxisConfig::default())
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("config", &self.config)
            .field("children", &self.children.len())
            .field("legend", &self.legend)
            .finish()
    }
}

fn default_ticks(count: usize) -> Vec<f64> {
    (1..=count).map(|i| i as f64).collect()
}

fn push_text(options: &mut StyleOptions, key: &str, value: &str) {
    if !value.is_empty() {
        options.push_braced(key, value);
    }
}

fn push_number(options: &mut StyleOptions, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        options.push_braced(key, value);
    }
}
