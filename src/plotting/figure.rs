//! Figure (LaTeX document) implementation.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::FromStr;

use log::info;

use crate::config::Settings;
use crate::plotting::axes::Axis;
use crate::plotting::backend::{session_id, Compiler};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::options::indent;

/// Shared handle to an axis owned by a figure.
pub type AxisHandle = Rc<RefCell<Axis>>;

/// Output formats understood by [`Figure::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// The rendered LaTeX source
    Tex,
    /// The compiled PDF
    Pdf,
}

impl SaveFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> PlotResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for SaveFormat {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tex" => Ok(SaveFormat::Tex),
            "pdf" => Ok(SaveFormat::Pdf),
            _ => Err(PlotError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A figure containing one or more axes.
#[derive(Debug)]
pub struct Figure {
    id: usize,
    /// Page width in centimetres, inferred from the axes when unset
    pub width: Option<f64>,
    /// Page height in centimetres, inferred from the axes when unset
    pub height: Option<f64>,
    /// Space around the axes in centimetres
    pub margin: f64,
    /// LaTeX preamble of the generated document
    pub preamble: String,
    axes: Vec<AxisHandle>,
}

impl Figure {
    /// Create an empty figure with the default preamble.
    pub fn new(id: usize) -> Self {
        Self::with_settings(id, &Settings::default())
    }

    /// Create an empty figure using the preamble of `settings`.
    pub fn with_settings(id: usize, settings: &Settings) -> Self {
        Figure {
            id,
            width: None,
            height: None,
            margin: 2.0,
            preamble: settings.preamble.clone(),
            axes: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Take ownership of an axis and return a handle to it.
    pub fn add_axis(&mut self, axis: Axis) -> AxisHandle {
        let handle = Rc::new(RefCell::new(axis));
        self.axes.push(Rc::clone(&handle));
        handle
    }

    /// Axes in insertion (render) order.
    pub fn axes(&self) -> &[AxisHandle] {
        &self.axes
    }

    /// True if `axis` belongs to this figure.
    pub fn contains(&self, axis: &AxisHandle) -> bool {
        self.axes.iter().any(|a| Rc::ptr_eq(a, axis))
    }

    /// Page size in centimetres.
    ///
    /// Unset dimensions span the axes plus the margin on both sides, or
    /// `2 * margin + 1` for a figure without axes.
    pub fn canvas_size(&self) -> (f64, f64) {
        let extent = |f: fn(&Axis) -> f64| -> f64 {
            if self.axes.is_empty() {
                1.0
            } else {
                self.axes
                    .iter()
                    .map(|ax| f(&ax.borrow()))
                    .fold(f64::NEG_INFINITY, f64::max)
            }
        };

        let width = self.width.unwrap_or_else(|| {
            2.0 * self.margin + extent(|ax| ax.config.left + ax.config.width)
        });
        let height = self.height.unwrap_or_else(|| {
            2.0 * self.margin + extent(|ax| ax.config.top + ax.config.height)
        });
        (width, height)
    }

    /// Render the complete LaTeX document.
    pub fn render(&self) -> String {
        let (width, height) = self.canvas_size();

        let mut tex = String::new();
        tex.push_str("\\documentclass{article}\n\n");
        tex.push_str(&self.preamble);
        tex.push_str("\n\\usepackage[\n");
        tex.push_str("\tmargin=0cm,\n");
        tex.push_str(&format!("\tpaperwidth={}cm,\n", width));
        tex.push_str(&format!("\tpaperheight={}cm]{{geometry}}\n\n", height));
        tex.push_str("\\begin{document}\n");
        tex.push_str("\t\\thispagestyle{empty}\n\n");

        if self.axes.is_empty() {
            tex.push_str("\t\\mbox{}\n");
        } else {
            tex.push_str("\t\\begin{figure}\n");
            tex.push_str("\t\t\\centering\n");
            tex.push_str("\t\t\\begin{tikzpicture}\n");
            for ax in &self.axes {
                tex.push_str(&indent(&ax.borrow().render(), 3));
            }
            tex.push_str("\t\t\\end{tikzpicture}\n");
            tex.push_str("\t\\end{figure}\n");
        }

        tex.push_str("\\end{document}");
        tex
    }

    /// Write the rendered document to `writer`, byte for byte.
    pub fn write_tex(&self, writer: &mut impl Write) -> PlotResult<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Basename for intermediate files, unique per process and figure.
    pub fn basename(&self) -> String {
        format!("texplot_{}_{}", session_id(), self.id)
    }

    /// Compile the figure and return the path of the PDF.
    pub fn compile(&self, compiler: &dyn Compiler) -> PlotResult<PathBuf> {
        compiler.compile(&self.render(), &self.basename())
    }

    /// Compile the figure and open the PDF in the viewer.
    pub fn draw(&self, compiler: &dyn Compiler) -> PlotResult<()> {
        let pdf = self.compile(compiler)?;
        compiler.view(&pdf)
    }

    /// Save the figure as LaTeX source or PDF.
    ///
    /// Without an explicit `format` it is inferred from the extension of
    /// `path`. The format is checked before anything is written. Returns
    /// the format that was written.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        format: Option<&str>,
        compiler: &dyn Compiler,
    ) -> PlotResult<SaveFormat> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format.parse()?,
            None => SaveFormat::from_path(path)?,
        };

        match format {
            SaveFormat::Tex => self.write_tex(&mut File::create(path)?)?,
            SaveFormat::Pdf => {
                let pdf = self.compile(compiler)?;
                fs::copy(&pdf, path)?;
            }
        }
        info!("Figure {} written to: {}", self.id, path.display());
        Ok(format)
    }
}
