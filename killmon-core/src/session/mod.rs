#[cfg(test)]
mod tests;

use crate::classify::{Classification, Tally, classify};
use crate::event::{EventId, KillEvent};
use crate::scan::{EventLog, LogSource, ScanError, Scanner, session_token};
use crate::settings::MonitorSettings;
use crate::sink::PersistenceSink;
use chrono::{DateTime, Local};
use std::collections::HashSet;

/// An event that passed classification and should be displayed.
#[derive(Debug, Clone)]
pub struct Evaluated {
    pub event: KillEvent,
    pub classification: Classification,
    /// Tally right after this event was counted.
    pub tally: Tally,
}

/// State of one monitoring session: collected events, which of them were already counted,
/// and the running tally.
#[derive(Debug)]
pub struct ScanSession {
    started_at: DateTime<Local>,
    token: String,
    log: EventLog,
    processed: HashSet<EventId>,
    tally: Tally,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        Self {
            token: session_token(&started_at),
            started_at,
            log: EventLog::new(),
            processed: HashSet::new(),
            tally: Tally::default(),
        }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Used to name persisted output; never used for filtering.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Run one scan cycle over the configured log.
    pub fn scan(
        &mut self,
        source: &dyn LogSource,
        settings: &MonitorSettings,
        persistence: Option<&dyn PersistenceSink>,
    ) -> Result<usize, ScanError> {
        let scanner = Scanner {
            source,
            handle: &settings.handle,
            persistence,
        };
        scanner.scan(&mut self.log, &settings.log_path, &self.token)
    }

    /// Classify every event not yet counted, in collection order.
    ///
    /// Counted events are marked processed and never returned again. Suppressed events stay
    /// unprocessed and are re-examined (and suppressed again) on later calls.
    pub fn evaluate_pending(&mut self, settings: &MonitorSettings) -> Vec<Evaluated> {
        let mut shown = Vec::new();

        for event in &self.log {
            if self.processed.contains(&event.id) {
                continue;
            }

            let classification = classify(event, &settings.handle, &settings.modes);
            if !classification.is_counted() {
                tracing::trace!(event_id = %event.id, ?classification, "event suppressed");
                continue;
            }

            self.tally.record(classification);
            self.processed.insert(event.id);
            shown.push(Evaluated {
                event: event.clone(),
                classification,
                tally: self.tally,
            });
        }

        if !shown.is_empty() {
            tracing::info!(
                new = shown.len(),
                kills = self.tally.kills,
                deaths = self.tally.deaths,
                "kill events evaluated"
            );
        }

        shown
    }
}
