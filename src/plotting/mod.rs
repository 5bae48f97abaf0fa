//! Scene graph of figures, axes and plots rendered to pgfplots markup.
//! Provides a matplotlib-like stateful API on top of explicit handles.

pub mod axes;
pub mod backend;
pub mod context;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod options;
pub mod plot;
pub mod pyplot;
pub mod style;

pub use axes::{Axis, AxisMode};
pub use backend::{Compiler, LatexCompiler};
pub use context::{Context, FigureHandle};
pub use data::IntoPlotData;
pub use element::{AxisConfig, AxisLine, Bounds, Legend, Renderable, Text};
pub use error::{PlotError, PlotResult};
pub use figure::{AxisHandle, Figure, SaveFormat};
pub use options::StyleOptions;
pub use plot::{LinePlot, PlotStyle};
pub use style::{Color, LineStyle, Marker};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::{Axis, AxisMode};
    pub use crate::plotting::context::Context;
    pub use crate::plotting::data::IntoPlotData;
    pub use crate::plotting::element::{AxisConfig, Bounds, Legend, Renderable, Text};
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::Figure;
    pub use crate::plotting::plot::{LinePlot, PlotStyle};
    pub use crate::plotting::style::{Color, LineStyle, Marker};
}
