use killmon_core::classify::{Classification, Tally};
use killmon_core::event::KillEvent;
use killmon_core::sink::{AlertSink, DisplaySink, PersistenceSink, Severity, SinkError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub event: KillEvent,
    pub classification: Classification,
    pub tally: Tally,
    pub redacted: bool,
}

#[derive(Default)]
pub struct RecordingDisplay {
    resets: AtomicUsize,
    shown: Mutex<Vec<Recorded>>,
}

impl RecordingDisplay {
    pub fn shown(&self) -> Vec<Recorded> {
        self.shown.lock().unwrap().clone()
    }

    pub fn shown_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl DisplaySink for RecordingDisplay {
    fn reset(&self, _show_kill_count: bool) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn show(&self, event: &KillEvent, classification: Classification, tally: Tally, redacted: bool) {
        self.shown.lock().unwrap().push(Recorded {
            event: event.clone(),
            classification,
            tally,
            redacted,
        });
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    alerts: Mutex<Vec<(Severity, String, String)>>,
}

impl RecordingAlert {
    pub fn alerts(&self) -> Vec<(Severity, String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlert {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((severity, title.to_string(), message.to_string()));
    }
}

/// Remembers `(session token, victim)` for every write.
#[derive(Default)]
pub struct RecordingPersistence {
    written: Mutex<Vec<(String, String)>>,
}

impl RecordingPersistence {
    pub fn written(&self) -> Vec<(String, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl PersistenceSink for RecordingPersistence {
    fn write(&self, event: &KillEvent, session_token: &str) -> Result<(), SinkError> {
        self.written
            .lock()
            .unwrap()
            .push((session_token.to_string(), event.killed_player.clone()));
        Ok(())
    }
}
