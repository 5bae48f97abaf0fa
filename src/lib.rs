//! texplot: build 2-D chart scene graphs and render them as pgfplots/TikZ LaTeX markup.

pub mod config;
pub mod plotting;
pub mod scene;
