//! Plot types for visualizing data.

mod format;
mod line;

pub use format::PlotStyle;
pub use line::LinePlot;
