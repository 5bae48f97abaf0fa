//! Error types for the texplot library.

use std::fmt;
use std::io;

/// The main error type for texplot operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (temp files, saving, etc.)
    Io(io::Error),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Save requested with a format other than `tex` or `pdf`
    UnsupportedFormat(String),
    /// The LaTeX compiler or the viewer did not exit successfully
    ExternalTool {
        command: String,
        status: Option<i32>,
    },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::UnsupportedFormat(format) => write!(f, "Unknown format '{}'", format),
            PlotError::ExternalTool { command, status } => match status {
                Some(code) => write!(f, "Command '{}' failed with exit status {}", command, code),
                None => write!(f, "Command '{}' was terminated by a signal", command),
            },
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::InvalidConfig(err.to_string())
    }
}

/// Result type alias for texplot operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlotError::UnsupportedFormat("png".to_string());
        assert_eq!(err.to_string(), "Unknown format 'png'");

        let err = PlotError::ExternalTool {
            command: "pdflatex".to_string(),
            status: Some(1),
        };
        assert_eq!(err.to_string(), "Command 'pdflatex' failed with exit status 1");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error;
        let err: PlotError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error"));
    }
}
