use crate::settings::Channel;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(help("Create one with `killmon config init`."))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("config validation failed ({} errors)", errors.len())]
    Validation {
        #[related]
        errors: Vec<ValidationError>,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("monitor.handle must not be empty")]
    #[diagnostic(help("Set `handle` to your in-game name, e.g. handle = \"Bob\"."))]
    EmptyHandle,

    #[error("monitor.interval must be at least 1 second, got {interval}")]
    #[diagnostic(help("The log is re-read every `interval` seconds; 1 to 60 is typical."))]
    InvalidInterval { interval: u64 },

    #[error("no log file path configured for channel '{channel}'")]
    #[diagnostic(help("Set `channels.{channel}` or select another channel."))]
    MissingChannelPath { channel: Channel },
}
