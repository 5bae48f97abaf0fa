//! pdflatex-style compiler backend.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::Settings;
use crate::plotting::backend::Compiler;
use crate::plotting::error::{PlotError, PlotResult};

/// Runs the configured LaTeX compiler and viewer as external processes.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    settings: Settings,
}

impl LatexCompiler {
    pub fn new(settings: Settings) -> Self {
        LatexCompiler { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for LatexCompiler {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Compiler for LatexCompiler {
    fn compile(&self, source: &str, basename: &str) -> PlotResult<PathBuf> {
        let tmp_dir = &self.settings.tmp_dir;
        let tex_file = tmp_dir.join(format!("{}.tex", basename));
        let pdf_file = tmp_dir.join(format!("{}.pdf", basename));

        fs::write(&tex_file, source)?;

        let mut command = Command::new(&self.settings.compiler);
        command
            .args(&self.settings.compiler_args)
            .arg("-output-directory")
            .arg(tmp_dir)
            .arg(&tex_file)
            .stdout(Stdio::null());
        debug!("Running {:?}", command);

        let status = command.status()?;
        if !status.success() {
            return Err(PlotError::ExternalTool {
                command: self.settings.compiler.clone(),
                status: status.code(),
            });
        }

        info!("Compiled {}", pdf_file.display());
        Ok(pdf_file)
    }

    fn view(&self, pdf: &Path) -> PlotResult<()> {
        debug!("Opening {} with {}", pdf.display(), self.settings.viewer);
        let status = Command::new(&self.settings.viewer).arg(pdf).status()?;
        if !status.success() {
            return Err(PlotError::ExternalTool {
                command: self.settings.viewer.clone(),
                status: status.code(),
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn settings(dir: &Path, compiler: &str, viewer: &str) -> Settings {
        Settings {
            tmp_dir: dir.to_path_buf(),
            compiler: compiler.to_string(),
            compiler_args: Vec::new(),
            viewer: viewer.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_successful_compile_writes_source() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = LatexCompiler::new(settings(dir.path(), "true", "true"));

        let pdf = compiler.compile("\\begin{document}\\end{document}", "texplot_1_0").unwrap();
        assert_eq!(pdf, dir.path().join("texplot_1_0.pdf"));
        assert_eq!(
            fs::read_to_string(dir.path().join("texplot_1_0.tex")).unwrap(),
            "\\begin{document}\\end{document}"
        );
        compiler.view(&pdf).unwrap();
    }

    #[test]
    fn test_failing_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = LatexCompiler::new(settings(dir.path(), "false", "true"));

        let err = compiler.compile("", "texplot_1_1").unwrap_err();
        match err {
            PlotError::ExternalTool { command, status } => {
                assert_eq!(command, "false");
                assert_eq!(status, Some(1));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_failing_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = LatexCompiler::new(settings(dir.path(), "true", "false"));
        let err = compiler.view(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, PlotError::ExternalTool { .. }));
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler =
            LatexCompiler::new(settings(dir.path(), "texplot-no-such-compiler", "true"));
        assert!(matches!(compiler.compile("", "x"), Err(PlotError::Io(_))));
    }
}
