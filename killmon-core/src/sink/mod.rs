//! Collaborators the monitor reports to.
//!
//! All sinks are fire-and-forget from the scheduler's point of view, except persistence:
//! a persistence failure fails the scan cycle.

mod alert;
mod display;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use alert::{Severity, TracingAlert};
pub use display::{ChannelDisplay, ConsoleDisplay, DisplayUpdate};
pub use error::SinkError;
pub use file::FilePersistence;

use crate::classify::{Classification, Tally};
use crate::event::KillEvent;
use std::sync::Arc;

/// Stores newly accepted events.
pub trait PersistenceSink: Send + Sync {
    /// `session_token` is stable for one session and safe to use in file names.
    fn write(&self, event: &KillEvent, session_token: &str) -> Result<(), SinkError>;
}

/// User-facing notifications.
pub trait AlertSink: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str);
}

/// Presentation of classified events.
pub trait DisplaySink: Send + Sync {
    /// Session state was cleared; drop everything shown so far.
    fn reset(&self, show_kill_count: bool);

    /// One newly classified event and the tally including it.
    fn show(&self, event: &KillEvent, classification: Classification, tally: Tally, redacted: bool);
}

/// The sinks a scheduler reports to.
#[derive(Clone)]
pub struct Sinks {
    pub display: Arc<dyn DisplaySink>,
    pub alert: Arc<dyn AlertSink>,
    /// Overrides the [`FilePersistence`] built from the session's output directory.
    pub persistence: Option<Arc<dyn PersistenceSink>>,
}

impl Sinks {
    pub fn new(display: Arc<dyn DisplaySink>, alert: Arc<dyn AlertSink>) -> Self {
        Self {
            display,
            alert,
            persistence: None,
        }
    }

    pub fn with_persistence(mut self, persistence: Arc<dyn PersistenceSink>) -> Self {
        self.persistence = Some(persistence);
        self
    }
}
