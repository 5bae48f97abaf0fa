//! Free functions over a default context, one per thread.
//!
//! ```no_run
//! use texplot::plotting::pyplot::*;
//!
//! plot([1.0, 2.0, 3.0], [2.0, 4.0, 3.0], "r.");
//! xlabel("time");
//! axis("tight").unwrap();
//! save("figure.tex", None).unwrap();
//! ```

use std::cell::RefCell;
use std::path::Path;

use crate::config::Settings;
use crate::plotting::axes::AxisMode;
use crate::plotting::context::{Context, FigureHandle};
use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{Legend, Renderable, Text};
use crate::plotting::error::PlotResult;
use crate::plotting::figure::{AxisHandle, SaveFormat};
use crate::plotting::plot::LinePlot;

thread_local! {
    static CONTEXT: RefCell<Context> = RefCell::new(Context::new());
}

/// Run `f` with the default context of this thread.
pub fn with_context<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    CONTEXT.with(|ctx| f(&mut ctx.borrow_mut()))
}

/// Replace the settings of the default context.
pub fn configure(settings: Settings) {
    with_context(|ctx| ctx.set_settings(settings));
}

/// Currently active figure.
pub fn gcf() -> FigureHandle {
    with_context(|ctx| ctx.gcf())
}

/// Currently active axis.
pub fn gca() -> AxisHandle {
    with_context(|ctx| ctx.gca())
}

/// Create a new figure or move the focus to an existing one.
pub fn figure(id: Option<usize>) -> FigureHandle {
    with_context(|ctx| ctx.figure(id))
}

/// Dispose of a figure.
pub fn close(id: usize) -> Option<FigureHandle> {
    with_context(|ctx| ctx.close_figure(id))
}

/// Plot `y` against `x` with a format string such as `"r."` or `"b--"`.
pub fn plot(x: impl IntoPlotData, y: impl IntoPlotData, format: &str) -> AxisHandle {
    add(LinePlot::new(x, y).format(format))
}

/// Plot `y` against `1..=y.len()`.
pub fn plot_y(y: impl IntoPlotData, format: &str) -> AxisHandle {
    add(LinePlot::from_y(y).format(format))
}

/// Plot every row of `rows` against the same `x` as a separate series.
pub fn plot_rows<Y: IntoPlotData>(
    x: impl IntoPlotData,
    rows: impl IntoIterator<Item = Y>,
    format: &str,
) -> AxisHandle {
    let x = x.into_plot_data();
    with_context(|ctx| {
        let ax = ctx.gca();
        for row in rows {
            ctx.add_child(LinePlot::new(x.clone(), row).format(format));
        }
        ax
    })
}

/// Place a text annotation at a data point.
pub fn text(content: impl Into<String>, x: f64, y: f64) -> AxisHandle {
    add(Text::new(content, x, y))
}

/// Add any plot or annotation to the current axis.
pub fn add(child: impl Renderable + 'static) -> AxisHandle {
    with_context(|ctx| ctx.add_child(child))
}

pub fn title(title: impl Into<String>) {
    gca().borrow_mut().set_title(title);
}

pub fn xlabel(label: impl Into<String>) {
    gca().borrow_mut().set_xlabel(label);
}

pub fn ylabel(label: impl Into<String>) {
    gca().borrow_mut().set_ylabel(label);
}

pub fn xtick(ticks: Vec<f64>) {
    gca().borrow_mut().set_xtick(ticks);
}

pub fn ytick(ticks: Vec<f64>) {
    gca().borrow_mut().set_ytick(ticks);
}

pub fn xticklabels<S: Into<String>>(labels: impl IntoIterator<Item = S>) {
    let labels = labels.into_iter().map(Into::into).collect();
    gca().borrow_mut().set_xticklabels(labels);
}

pub fn yticklabels<S: Into<String>>(labels: impl IntoIterator<Item = S>) {
    let labels = labels.into_iter().map(Into::into).collect();
    gca().borrow_mut().set_yticklabels(labels);
}

/// Apply an axis mode: `equal`, `square`, `auto`, `tight`, `center` or
/// `origin`.
pub fn axis(mode: &str) -> PlotResult<()> {
    let mode: AxisMode = mode.parse()?;
    gca().borrow_mut().apply_mode(mode);
    Ok(())
}

/// Set `[xmin, xmax, ymin, ymax]` of the current axis.
pub fn axis_limits(limits: [f64; 4]) {
    gca().borrow_mut().set_limits(limits);
}

/// Turn the grid on or off, or toggle it with `None`.
pub fn grid(value: Option<bool>) {
    gca().borrow_mut().set_grid(value);
}

/// Turn the axis box on or off, or toggle it with `None`.
pub fn box_(value: Option<bool>) {
    gca().borrow_mut().set_box(value);
}

/// Attach a legend to the current axis.
pub fn legend(legend: Legend) -> AxisHandle {
    with_context(|ctx| ctx.legend(legend))
}

/// Render the current figure.
pub fn render() -> String {
    with_context(|ctx| ctx.render())
}

/// Compile the current figure and open it in the viewer.
pub fn draw() -> PlotResult<()> {
    with_context(|ctx| ctx.draw())
}

/// Save the current figure; the format defaults to the file extension.
pub fn save(path: impl AsRef<Path>, format: Option<&str>) -> PlotResult<SaveFormat> {
    with_context(|ctx| ctx.save(path, format))
}
