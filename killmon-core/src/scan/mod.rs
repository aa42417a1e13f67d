//! Incremental scanning of the game log.
//!
//! Every cycle re-reads the whole file from the start; nothing about the previous read is
//! kept except the accumulated [`EventLog`]. Identity-based deduplication makes the
//! re-read idempotent, and truncation or rotation between cycles needs no special
//! handling.

mod error;
mod event_log;
mod source;


pub use error::ScanError;
pub use event_log::EventLog;
pub use source::{FileLogSource, LogSource};

use crate::event::{DEATH_MARKER, parse_line};
use crate::sink::PersistenceSink;
use chrono::{DateTime, Local};
use std::io::BufRead;
use std::path::Path;

/// File-name-safe rendering of a session start time.
pub fn session_token(started_at: &DateTime<Local>) -> String {
    started_at.format("%y%m%d-%H%M%S").to_string()
}

/// One pass over a log file on behalf of a tracked handle.
pub struct Scanner<'a> {
    pub source: &'a dyn LogSource,
    pub handle: &'a str,
    /// When set, every newly accepted event is written before the scan continues.
    pub persistence: Option<&'a dyn PersistenceSink>,
}

impl Scanner<'_> {
    /// Fold the events in `path` into `log`.
    ///
    /// Returns the number of newly accepted events. The log is re-sorted newest first even
    /// when persistence fails part-way.
    pub fn scan(
        &self,
        log: &mut EventLog,
        path: &Path,
        session_token: &str,
    ) -> Result<usize, ScanError> {
        let mut reader = self
            .source
            .open(path)
            .map_err(|e| ScanError::read(path, e))?;

        let result = self.fold_lines(&mut reader, log, path, session_token);
        log.sort_newest_first();
        result
    }

    fn fold_lines(
        &self,
        reader: &mut dyn BufRead,
        log: &mut EventLog,
        path: &Path,
        session_token: &str,
    ) -> Result<usize, ScanError> {
        let mut accepted = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| ScanError::read(path, e))?;
            if n == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if !line.contains(DEATH_MARKER) {
                continue;
            }

            let event = match parse_line(line) {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(error = %err, line, "failed to parse log line");
                    continue;
                }
            };

            if !event.involves(self.handle) || log.contains(&event.id) {
                continue;
            }

            tracing::info!(event_id = %event.id, "new kill event detected");
            tracing::debug!(?event, "kill event");
            log.insert(event.clone());
            accepted += 1;

            if let Some(sink) = self.persistence {
                sink.write(&event, session_token)?;
            }
        }

        Ok(accepted)
    }
}
