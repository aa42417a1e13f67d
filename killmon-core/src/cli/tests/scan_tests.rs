use crate::classify::{Classification, Tally};
use crate::cli::scan::{ScanArgs, collect, write_report};
use crate::event::REDACTED;
use crate::logging::{LogMode, console_layer};
use crate::test_support::{TS, death_line};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// In-memory stand-in for stderr.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn args(dir: &TempDir, lines: &[String]) -> ScanArgs {
    let log = dir.path().join("game.log");
    fs::write(&log, lines.join("\n")).unwrap();
    ScanArgs {
        log,
        handle: "Bob".to_string(),
        show_all: false,
        killer_mode: true,
        redact: false,
        json: false,
    }
}

#[test]
fn collect_classifies_newest_first() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let args = args(
        &dir,
        &[
            death_line("2025-02-12T14:38:24.454Z", "Bob", "Alice"),
            death_line("2025-02-12T14:40:00.000Z", "Carol", "Bob"),
        ],
    );

    // Act
    let report = collect(&args).unwrap();

    // Assert
    let kinds: Vec<_> = report.events.iter().map(|e| e.classification).collect();
    assert_eq!(kinds, vec![Classification::Kill, Classification::Death]);
    assert_eq!(report.tally, Tally { kills: 1, deaths: 1 });
}

#[test]
fn collect_redacts_killer_when_requested() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut args = args(&dir, &[death_line("2025-02-12T14:38:24.454Z", "Bob", "Alice")]);
    args.redact = true;

    // Act
    let report = collect(&args).unwrap();

    // Assert
    assert_eq!(report.events[0].event.killer, REDACTED);
    assert_eq!(report.events[0].event.killed_player, "Bob");
}

#[test]
fn collect_missing_log_is_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut args = args(&dir, &[]);
    args.log = dir.path().join("absent.log");

    // Act
    let result = collect(&args);

    // Assert
    assert!(result.is_err());
}

#[test]
fn json_report_is_a_single_document_while_logs_go_elsewhere() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut args = args(
        &dir,
        &[
            death_line(TS, "Alice", "Bob"),
            "<bad> [Notice] <Actor Death> CActor::Kill: 'Alice'".to_string(),
        ],
    );
    args.json = true;
    let logs = SharedBuf::default();
    let subscriber =
        tracing_subscriber::registry().with(console_layer::<Registry, _>(LogMode::Raw, logs.clone()));
    let mut stdout = Vec::new();

    // Act
    tracing::subscriber::with_default(subscriber, || {
        let report = collect(&args).unwrap();
        write_report(&report, args.json, &mut stdout).unwrap();
    });

    // Assert
    let doc: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(doc["tally"]["kills"], 1);
    assert_eq!(doc["events"].as_array().unwrap().len(), 1);
    let logs = logs.text();
    assert!(logs.contains("new kill event detected"));
    assert!(logs.contains("failed to parse log line"));
}

#[test]
fn text_report_ends_with_tally() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let args = args(&dir, &[death_line(TS, "Alice", "Bob")]);
    let report = collect(&args).unwrap();
    let mut out = Vec::new();

    // Act
    write_report(&report, false, &mut out).unwrap();

    // Assert
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[KILL]\nKill Date = "));
    assert!(text.ends_with("1 events, kills: 1, deaths: 0\n"));
}
