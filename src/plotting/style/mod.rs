//! Styling module for plots: colors, marks and line styles.

pub mod color;
pub mod line_style;
pub mod marker;

pub use color::Color;
pub use line_style::LineStyle;
pub use marker::Marker;
