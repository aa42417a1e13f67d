use crate::sink::SinkError;
use std::path::PathBuf;
use thiserror::Error;

/// A failed scan cycle. Both variants end the monitoring session.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Persist(#[from] SinkError),
}

impl ScanError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Short headline for the user-facing alert.
    pub fn alert_title(&self) -> &'static str {
        match self {
            ScanError::Read { .. } => "Failed to read log file",
            ScanError::Persist(_) => "Failed to write kill event",
        }
    }

    pub fn alert_message(&self) -> &'static str {
        match self {
            ScanError::Read { .. } => {
                "Please check if the file exists and the path is set correctly."
            }
            ScanError::Persist(_) => "Please check if the output directory is writable.",
        }
    }
}
