//! Declarative scene files.
//!
//! A scene lists figures, their axes and the plots, texts, legend and
//! modes of every axis. Applying a scene replays it against a [`Context`]
//! through the same operations the stateful API uses, so a scene renders
//! exactly like the equivalent sequence of calls.
//!
//! ```json
//! {
//!   "figures": [{
//!     "axes": [{
//!       "config": { "title": "Growth", "xlabel": "t" },
//!       "plots": [{ "y": [1, 2, 4, 8], "format": "b-" }],
//!       "legend": { "entries": ["2^t"], "location": "north west" },
//!       "modes": ["tight"]
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::plotting::axes::AxisMode;
use crate::plotting::context::{Context, FigureHandle};
use crate::plotting::element::{AxisConfig, Legend, Text};
use crate::plotting::error::PlotResult;
use crate::plotting::plot::{LinePlot, PlotStyle};

/// A set of figures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub figures: Vec<FigureScene>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureScene {
    /// Figure id; a fresh id is allocated when unset
    pub id: Option<usize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<f64>,
    pub axes: Vec<AxisScene>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisScene {
    pub config: AxisConfig,
    pub plots: Vec<PlotScene>,
    pub texts: Vec<Text>,
    pub legend: Option<Legend>,
    /// Axis modes applied after all children were added
    pub modes: Vec<String>,
    /// Axis box on or off
    #[serde(rename = "box")]
    pub axis_box: Option<bool>,
}

/// A line plot; `x` defaults to `1..=y.len()`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotScene {
    #[serde(default)]
    pub x: Option<Vec<f64>>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub style: PlotStyle,
}

impl PlotScene {
    fn to_plot(&self) -> LinePlot {
        let plot = match self.x {
            Some(ref x) => LinePlot::new(x.clone(), self.y.clone()),
            None => LinePlot::from_y(self.y.clone()),
        };
        plot.style(self.style.clone()).format(&self.format)
    }
}

impl Scene {
    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create every figure of the scene in `ctx` and return their handles
    /// in scene order.
    ///
    /// All axis modes are validated before the context is touched. The last
    /// figure and its last axis are current afterwards.
    pub fn apply(&self, ctx: &mut Context) -> PlotResult<Vec<FigureHandle>> {
        let modes = self
            .figures
            .iter()
            .map(|fig| {
                fig.axes
                    .iter()
                    .map(|ax| ax.parse_modes())
                    .collect::<PlotResult<Vec<_>>>()
            })
            .collect::<PlotResult<Vec<_>>>()?;

        let mut handles = Vec::with_capacity(self.figures.len());
        for (fig_scene, fig_modes) in self.figures.iter().zip(modes) {
            let fig = ctx.figure(fig_scene.id);
            {
                let mut fig = fig.borrow_mut();
                if fig_scene.width.is_some() {
                    fig.width = fig_scene.width;
                }
                if fig_scene.height.is_some() {
                    fig.height = fig_scene.height;
                }
                if let Some(margin) = fig_scene.margin {
                    fig.margin = margin;
                }
            }

            for (ax_scene, ax_modes) in fig_scene.axes.iter().zip(fig_modes) {
                ax_scene.apply(ctx, &ax_modes);
            }
            debug!(
                "Scene figure {} with {} axes applied",
                fig.borrow().id(),
                fig_scene.axes.len()
            );
            handles.push(fig);
        }
        Ok(handles)
    }
}

impl AxisScene {
    fn parse_modes(&self) -> PlotResult<Vec<AxisMode>> {
        self.modes.iter().map(|mode| mode.parse()).collect()
    }

    fn apply(&self, ctx: &mut Context, modes: &[AxisMode]) {
        let ax = ctx.add_axis(self.config.clone());
        for plot in &self.plots {
            ctx.add_child(plot.to_plot());
        }
        for text in &self.texts {
            ctx.add_child(text.clone());
        }
        if let Some(ref legend) = self.legend {
            ctx.legend(legend.clone());
        }

        let mut ax = ax.borrow_mut();
        for &mode in modes {
            ax.apply_mode(mode);
        }
        if self.axis_box.is_some() {
            ax.set_box(self.axis_box);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::element::AxisLine;
    use crate::plotting::error::PlotError;
    use std::io::Write;

    const SCENE: &str = r#"{
        "figures": [
            {
                "margin": 1,
                "axes": [
                    {
                        "config": { "title": "Growth", "xlabel": "t", "width": 6, "height": 4 },
                        "plots": [
                            { "y": [1, 2, 4, 8], "format": "b-" },
                            { "x": [0, 5], "y": [0, 1], "style": { "color": "red", "line_width": 2 } }
                        ],
                        "texts": [ { "content": "peak", "x": 4, "y": 8, "anchor": "south" } ],
                        "legend": { "entries": ["2^t", "ramp"], "location": "north west" },
                        "modes": ["tight"],
                        "box": true
                    }
                ]
            },
            { "id": 4, "width": 10, "height": 5 }
        ]
    }"#;

    #[test]
    fn test_apply_builds_figures() {
        let scene = Scene::from_json(SCENE).unwrap();
        let mut ctx = Context::new();
        let figures = scene.apply(&mut ctx).unwrap();

        assert_eq!(figures.len(), 2);
        assert_eq!(ctx.figure_ids(), vec![0, 4]);
        assert_eq!(figures[1].borrow().canvas_size(), (10.0, 5.0));

        let first = figures[0].borrow();
        assert_eq!(first.canvas_size(), (8.0, 6.0));
        let ax = first.axes()[0].borrow();
        assert_eq!(ax.children().len(), 3);
        assert_eq!(ax.config.title, "Growth");
        assert_eq!(ax.config.xmin, Some(0.0));
        assert_eq!(ax.config.xmax, Some(5.0));
        assert_eq!(ax.config.ymax, Some(8.0));
        assert_eq!(ax.config.axis_x_line, Some(AxisLine::Box));
    }

    #[test]
    fn test_rendered_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        let mut ctx = Context::new();
        let figures = scene.apply(&mut ctx).unwrap();
        let tex = figures[0].borrow().render();

        assert!(tex.contains("\\addplot[color=blue,solid] coordinates {"));
        assert!(tex.contains("\\addplot[color=red,line width=2pt] coordinates {"));
        assert!(tex.contains("\\node[anchor=south] at (axis cs:4,8) {peak};"));
        assert!(tex.contains("legend entries={2^t,ramp}"));
        assert!(tex.contains("anchor=north west"));
    }

    #[test]
    fn test_last_figure_is_current() {
        let scene = Scene::from_json(SCENE).unwrap();
        let mut ctx = Context::new();
        scene.apply(&mut ctx).unwrap();
        assert_eq!(ctx.gcf().borrow().id(), 4);
    }

    #[test]
    fn test_unknown_mode_leaves_context_untouched() {
        let scene = Scene::from_json(r#"{"figures": [{"axes": [{"modes": ["sideways"]}]}]}"#)
            .unwrap();
        let mut ctx = Context::new();
        assert!(matches!(
            scene.apply(&mut ctx),
            Err(PlotError::InvalidConfig(_))
        ));
        assert!(ctx.figure_ids().is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Scene::from_json(r#"{"figures": [{"axis": []}]}"#).unwrap_err();
        assert!(matches!(err, PlotError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENE.as_bytes()).unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.figures.len(), 2);
        assert_eq!(scene.figures[1].id, Some(4));

        assert!(matches!(
            Scene::load("/nonexistent/scene.json"),
            Err(PlotError::Io(_))
        ));
    }
}
