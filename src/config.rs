//! Settings for LaTeX output and the external toolchain.
//!
//! Every field has a default, so a settings file only needs to name the
//! values it overrides:
//!
//! ```json
//! { "compiler": "lualatex", "tmp_dir": "/var/tmp/texplot" }
//! ```

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const DEFAULT_PREAMBLE: &str = "\\usepackage[utf8]{inputenc}\n\
\\usepackage{amsmath}\n\
\\usepackage{amssymb}\n\
\\usepackage{pgfplots}\n\
\\pgfplotsset{compat=newest}\n";

/// Toolchain and document settings shared by all figures of a context.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// LaTeX inserted between `\documentclass` and the page geometry
    pub preamble: String,
    /// Directory for intermediate `.tex`/`.pdf` files
    pub tmp_dir: PathBuf,
    /// Program compiling a `.tex` file into a PDF
    pub compiler: String,
    /// Arguments passed to the compiler before `-output-directory`
    pub compiler_args: Vec<String>,
    /// Program opening a compiled PDF
    pub viewer: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            preamble: DEFAULT_PREAMBLE.to_string(),
            tmp_dir: std::env::temp_dir(),
            compiler: "pdflatex".to_string(),
            compiler_args: vec![
                "-halt-on-error".to_string(),
                "-interaction".to_string(),
                "batchmode".to_string(),
            ],
            viewer: default_viewer().to_string(),
        }
    }
}

fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"compiler": "lualatex"}"#).unwrap();
        assert_eq!(settings.compiler, "lualatex");
        assert_eq!(settings.compiler_args, Settings::default().compiler_args);
        assert!(settings.preamble.contains("\\usepackage{pgfplots}"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Settings, _> = serde_json::from_str(r#"{"compile": "lualatex"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"viewer": "evince", "tmp_dir": "/scratch"}}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.viewer, "evince");
        assert_eq!(settings.tmp_dir, PathBuf::from("/scratch"));
    }

    #[test]
    fn test_load_malformed_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
