use crate::classify::{Classification, Tally};
use crate::event::{KillEvent, parse_line};
use crate::scan::LogSource;
use crate::sink::{AlertSink, DisplaySink, PersistenceSink, Severity, SinkError};
use std::io::{BufRead, Cursor};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TS: &str = "2025-02-12T14:38:24.454Z";

/// Build a realistic `<Actor Death>` line.
pub fn death_line(timestamp: &str, victim: &str, killer: &str) -> String {
    format!(
        "<{timestamp}> [Notice] <Actor Death> CActor::Kill: '{victim}' [200146295176] \
         in zone 'Stanton' killed by '{killer}' [200146295177] using 'Rifle' \
         [Class Ballistic] with damage type 'Bullet' from direction x: 0.1, y: 0.2, z: 0.3 \
         [Team_ActorTech][Actor]"
    )
}

pub fn event(timestamp: &str, victim: &str, killer: &str) -> KillEvent {
    parse_line(&death_line(timestamp, victim, killer)).expect("fixture line should parse")
}

//-----------------------------------------------------------------------------
// In-memory collaborators
//-----------------------------------------------------------------------------

/// A log whose content can be swapped or removed between cycles.
#[derive(Default)]
pub struct MemorySource {
    content: Mutex<Option<String>>,
    opens: AtomicUsize,
}

impl MemorySource {
    pub fn new(lines: &[String]) -> Self {
        let source = Self::default();
        source.set(lines);
        source
    }

    pub fn set(&self, lines: &[String]) {
        *self.content.lock().unwrap() = Some(lines.join("\n"));
    }

    pub fn remove(&self) {
        *self.content.lock().unwrap() = None;
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl LogSource for MemorySource {
    fn open(&self, _path: &Path) -> std::io::Result<Box<dyn BufRead + Send>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        match self.content.lock().unwrap().clone() {
            Some(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "log file vanished",
            )),
        }
    }
}

/// Records persisted events; fails every write once `fail_after` writes succeeded.
#[derive(Default)]
pub struct RecordingPersistence {
    pub written: Mutex<Vec<(String, String)>>,
    pub fail_after: Option<usize>,
}

impl PersistenceSink for RecordingPersistence {
    fn write(&self, event: &KillEvent, session_token: &str) -> Result<(), SinkError> {
        let mut written = self.written.lock().unwrap();
        if self.fail_after.is_some_and(|n| written.len() >= n) {
            return Err(SinkError::io(
                "memory",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        written.push((event.killed_player.clone(), session_token.to_owned()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub resets: Mutex<Vec<bool>>,
    pub shown: Mutex<Vec<(KillEvent, Classification, Tally, bool)>>,
}

impl RecordingDisplay {
    pub fn shown_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.lock().unwrap().len()
    }
}

impl DisplaySink for RecordingDisplay {
    fn reset(&self, show_kill_count: bool) {
        self.resets.lock().unwrap().push(show_kill_count);
    }

    fn show(&self, event: &KillEvent, classification: Classification, tally: Tally, redacted: bool) {
        self.shown
            .lock()
            .unwrap()
            .push((event.clone(), classification, tally, redacted));
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    pub alerts: Mutex<Vec<(Severity, String)>>,
}

impl RecordingAlert {
    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }
}

impl AlertSink for RecordingAlert {
    fn notify(&self, severity: Severity, title: &str, _message: &str) {
        self.alerts.lock().unwrap().push((severity, title.to_owned()));
    }
}
