//! Registry of figures and the "current figure / current axis" selection.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use log::debug;

use crate::config::Settings;
use crate::plotting::axes::Axis;
use crate::plotting::backend::LatexCompiler;
use crate::plotting::element::{AxisConfig, Legend, Renderable};
use crate::plotting::error::PlotResult;
use crate::plotting::figure::{AxisHandle, Figure, SaveFormat};

/// Shared handle to a registered figure.
pub type FigureHandle = Rc<RefCell<Figure>>;

/// Owns all live figures and tracks which figure and axis are current.
///
/// Every operation that needs a figure or axis and has none creates one on
/// demand, so a fresh context can be drawn into immediately.
#[derive(Debug, Default)]
pub struct Context {
    settings: Settings,
    figures: BTreeMap<usize, FigureHandle>,
    current_figure: Option<FigureHandle>,
    current_axis: Option<AxisHandle>,
}

impl Context {
    /// Create an empty context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Context {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings; figures created later use the new preamble.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Compiler backend configured from the settings of this context.
    pub fn compiler(&self) -> LatexCompiler {
        LatexCompiler::new(self.settings.clone())
    }

    /// Ids of all live figures in ascending order.
    pub fn figure_ids(&self) -> Vec<usize> {
        self.figures.keys().copied().collect()
    }

    /// Look up a figure without changing the selection.
    pub fn get_figure(&self, id: usize) -> Option<FigureHandle> {
        self.figures.get(&id).cloned()
    }

    /// Create a figure with the smallest free id and make it current.
    pub fn new_figure(&mut self) -> FigureHandle {
        let id = min_free(self.figures.keys().copied());
        self.create_figure(id)
    }

    /// Select figure `id`, creating it if it does not exist.
    ///
    /// Without an id a new figure is always created. Selecting a figure
    /// moves the current axis to its most recently added axis.
    pub fn figure(&mut self, id: Option<usize>) -> FigureHandle {
        match id {
            Some(id) => match self.figures.get(&id).cloned() {
                Some(fig) => {
                    debug!("Selecting figure {}", id);
                    self.current_axis = fig.borrow().axes().last().cloned();
                    self.current_figure = Some(Rc::clone(&fig));
                    fig
                }
                None => self.create_figure(id),
            },
            None => self.new_figure(),
        }
    }

    fn create_figure(&mut self, id: usize) -> FigureHandle {
        debug!("Creating figure {}", id);
        let fig = Rc::new(RefCell::new(Figure::with_settings(id, &self.settings)));
        self.figures.insert(id, Rc::clone(&fig));
        self.current_figure = Some(Rc::clone(&fig));
        self.current_axis = None;
        fig
    }

    /// Remove figure `id` from the registry, freeing its id.
    ///
    /// The current figure and axis are cleared if they belonged to it.
    pub fn close_figure(&mut self, id: usize) -> Option<FigureHandle> {
        let fig = self.figures.remove(&id)?;
        debug!("Closing figure {}", id);
        if self
            .current_figure
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, &fig))
        {
            self.current_figure = None;
            self.current_axis = None;
        }
        Some(fig)
    }

    /// The current figure, created if there is none.
    pub fn gcf(&mut self) -> FigureHandle {
        match self.current_figure {
            Some(ref fig) => Rc::clone(fig),
            None => self.new_figure(),
        }
    }

    /// The current axis, created under the current figure if there is none.
    pub fn gca(&mut self) -> AxisHandle {
        match self.current_axis {
            Some(ref ax) => Rc::clone(ax),
            None => self.add_axis(AxisConfig::default()),
        }
    }

    /// Add an axis to the current figure and make it current.
    pub fn add_axis(&mut self, config: AxisConfig) -> AxisHandle {
        let fig = self.gcf();
        let ax = fig.borrow_mut().add_axis(Axis::new(config));
        debug!("Added axis {} to figure {}", fig.borrow().axes().len(), fig.borrow().id());
        self.current_axis = Some(Rc::clone(&ax));
        ax
    }

    /// Make `axis` and the figure owning it current.
    ///
    /// Returns `false` and leaves the selection unchanged if no live figure
    /// owns the axis.
    pub fn select_axis(&mut self, axis: &AxisHandle) -> bool {
        let owner = self
            .figures
            .values()
            .find(|fig| fig.borrow().contains(axis))
            .cloned();
        match owner {
            Some(fig) => {
                self.current_figure = Some(fig);
                self.current_axis = Some(Rc::clone(axis));
                true
            }
            None => false,
        }
    }

    /// Add a plot or annotation to the current axis.
    pub fn add_child(&mut self, child: impl Renderable + 'static) -> AxisHandle {
        let ax = self.gca();
        ax.borrow_mut().add_child(child);
        ax
    }

    /// Attach a legend to the current axis, replacing any previous one.
    pub fn legend(&mut self, legend: Legend) -> AxisHandle {
        let ax = self.gca();
        ax.borrow_mut().set_legend(legend);
        ax
    }

    /// Render the current figure.
    pub fn render(&mut self) -> String {
        self.gcf().borrow().render()
    }

    /// Compile and open the current figure.
    pub fn draw(&mut self) -> PlotResult<()> {
        let compiler = self.compiler();
        self.gcf().borrow().draw(&compiler)
    }

    /// Save the current figure; see [`Figure::save`].
    pub fn save(
        &mut self,
        path: impl AsRef<Path>,
        format: Option<&str>,
    ) -> PlotResult<SaveFormat> {
        let compiler = self.compiler();
        self.gcf().borrow().save(path, format, &compiler)
    }
}

/// Smallest non-negative integer not in `used`.
fn min_free(used: impl IntoIterator<Item = usize>) -> usize {
    let mut used: Vec<usize> = used.into_iter().collect();
    used.sort_unstable();
    used.dedup();
    let mut candidate = 0;
    for id in used {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::element::Text;

    #[test]
    fn test_min_free() {
        assert_eq!(min_free(vec![]), 0);
        assert_eq!(min_free(vec![0, 1, 2]), 3);
        assert_eq!(min_free(vec![2, 0, 3]), 1);
        assert_eq!(min_free(vec![1, 1]), 0);
    }

    #[test]
    fn test_gcf_creates_once() {
        let mut ctx = Context::new();
        let a = ctx.gcf();
        let b = ctx.gcf();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.borrow().id(), 0);
        assert_eq!(ctx.figure_ids(), vec![0]);
    }

    #[test]
    fn test_ids_are_smallest_free() {
        let mut ctx = Context::new();
        for expected in 0..3 {
            assert_eq!(ctx.figure(None).borrow().id(), expected);
        }
        ctx.close_figure(1);
        assert_eq!(ctx.new_figure().borrow().id(), 1);
        assert_eq!(ctx.new_figure().borrow().id(), 3);
    }

    #[test]
    fn test_explicit_unused_id_honored() {
        let mut ctx = Context::new();
        assert_eq!(ctx.figure(Some(5)).borrow().id(), 5);
        assert_eq!(ctx.figure(None).borrow().id(), 0);
        assert_eq!(ctx.figure(None).borrow().id(), 1);
        assert_eq!(ctx.figure_ids(), vec![0, 1, 5]);
    }

    #[test]
    fn test_reselect_returns_same_figure() {
        let mut ctx = Context::new();
        let first = ctx.figure(Some(0));
        let ax = ctx.gca();
        ctx.figure(Some(1));
        let again = ctx.figure(Some(0));

        assert!(Rc::ptr_eq(&first, &again));
        assert_eq!(again.borrow().axes().len(), 1);
        assert!(Rc::ptr_eq(&ctx.gca(), &ax));
        assert_eq!(ctx.figure_ids(), vec![0, 1]);
    }

    #[test]
    fn test_new_figure_has_no_current_axis() {
        let mut ctx = Context::new();
        let ax0 = ctx.gca();
        ctx.figure(None);
        let ax1 = ctx.gca();
        assert!(!Rc::ptr_eq(&ax0, &ax1));
        assert_eq!(ctx.get_figure(1).unwrap().borrow().axes().len(), 1);
    }

    #[test]
    fn test_gca_creates_under_current_figure() {
        let mut ctx = Context::new();
        let ax = ctx.gca();
        let fig = ctx.gcf();
        assert!(fig.borrow().contains(&ax));
        assert!(Rc::ptr_eq(&ctx.gca(), &ax));
    }

    #[test]
    fn test_add_axis_becomes_current() {
        let mut ctx = Context::new();
        let first = ctx.add_axis(AxisConfig::new());
        let second = ctx.add_axis(AxisConfig::new().at(9.0, 0.0));
        assert!(Rc::ptr_eq(&ctx.gca(), &second));

        assert!(ctx.select_axis(&first));
        assert!(Rc::ptr_eq(&ctx.gca(), &first));

        let stray = Rc::new(RefCell::new(Axis::default()));
        assert!(!ctx.select_axis(&stray));
        assert!(Rc::ptr_eq(&ctx.gca(), &first));
    }

    #[test]
    fn test_select_axis_switches_figure() {
        let mut ctx = Context::new();
        let ax = ctx.gca();
        ctx.figure(None);
        assert_eq!(ctx.gcf().borrow().id(), 1);
        ctx.select_axis(&ax);
        assert_eq!(ctx.gcf().borrow().id(), 0);
    }

    #[test]
    fn test_close_current_clears_selection() {
        let mut ctx = Context::new();
        ctx.gca();
        assert!(ctx.close_figure(0).is_some());
        assert!(ctx.close_figure(0).is_none());
        assert!(ctx.figure_ids().is_empty());
        let fig = ctx.gcf();
        assert_eq!(fig.borrow().id(), 0);
        assert!(fig.borrow().axes().is_empty());
    }

    #[test]
    fn test_legend_attaches_to_current_axis() {
        let mut ctx = Context::new();
        ctx.add_child(Text::new("a", 0.0, 0.0));
        let ax = ctx.legend(Legend::new(["one"]));
        ctx.legend(Legend::new(["two"]));
        assert_eq!(ax.borrow().legend().unwrap().entries, vec!["two"]);
        assert_eq!(ax.borrow().children().len(), 1);
    }

    #[test]
    fn test_settings_preamble_used() {
        let settings = Settings {
            preamble: "\\usepackage{pgfplots}\n".to_string(),
            ..Settings::default()
        };
        let mut ctx = Context::with_settings(settings);
        let tex = ctx.render();
        assert!(tex.starts_with("\\documentclass{article}\n\n\\usepackage{pgfplots}\n\n\\usepackage["));
    }

    #[test]
    fn test_save_current_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current.tex");
        let mut ctx = Context::new();
        ctx.gca().borrow_mut().set_title("Current");
        ctx.save(&path, None).unwrap();
        let tex = std::fs::read_to_string(&path).unwrap();
        assert_eq!(tex, ctx.render());
        assert!(tex.contains("title={Current}"));
    }
}
