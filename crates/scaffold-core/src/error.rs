//! Error taxonomy for the scaffolding pipeline
//!
//! Every failure path maps to one of these variants so the binary can print a
//! human-readable diagnostic and exit non-zero. Nothing is retried; transient
//! clone or install failures require the operator to re-invoke the tool.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the scaffolding pipeline
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Required external tool absent from PATH - reported before any side effect
    #[error("{tool} is required but was not found on PATH. See {docs_url} for installation instructions.")]
    MissingTool {
        tool: &'static str,
        docs_url: &'static str,
    },

    /// An external command exited non-zero; its diagnostic output is surfaced verbatim
    #[error("`{command}` exited with status {code}\n{diagnostics}")]
    Subprocess {
        command: String,
        code: i32,
        diagnostics: String,
    },

    /// A filesystem operation (move/copy/delete) failed
    #[error("{context} ({}): {source}", .path.display())]
    Filesystem {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid input that the prompt surface could not have produced
    /// (e.g., an unknown track name passed via flag)
    #[error("{0}")]
    Usage(String),
}

impl ScaffoldError {
    /// Attach a filesystem error to the path it occurred on
    pub fn fs(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            context,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
