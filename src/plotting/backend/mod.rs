//! Backends turning rendered markup into documents.

mod latex;

pub use latex::LatexCompiler;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rand::Rng;

use crate::plotting::error::PlotResult;

/// Compiles LaTeX source and opens the result.
pub trait Compiler {
    /// Compile `source` using `basename` for intermediate files and return
    /// the path of the produced PDF.
    fn compile(&self, source: &str, basename: &str) -> PlotResult<PathBuf>;

    /// Open a compiled PDF.
    fn view(&self, pdf: &Path) -> PlotResult<()>;
}

/// Random number identifying this process in temporary file names.
pub fn session_id() -> u32 {
    static SESSION: OnceLock<u32> = OnceLock::new();
    *SESSION.get_or_init(|| rand::rng().random_range(0..100_000_000))
}
