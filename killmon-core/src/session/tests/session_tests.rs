use crate::classify::{Classification, Tally};
use crate::session::ScanSession;
use crate::settings::{ModeFlags, MonitorSettings};
use crate::test_support::{MemorySource, RecordingPersistence, TS, death_line};
use chrono::{Local, TimeZone};

fn settings(handle: &str, show_all: bool, killer_mode: bool) -> MonitorSettings {
    MonitorSettings::new(handle, "game.log").with_modes(ModeFlags {
        show_all,
        killer_mode,
        ..ModeFlags::default()
    })
}

#[test]
fn tracked_killer_scores_a_kill() {
    // Arrange
    let source = MemorySource::new(&[death_line(TS, "Alice", "Bob")]);
    let settings = settings("Bob", false, true);
    let mut session = ScanSession::new();

    // Act
    let accepted = session.scan(&source, &settings, None).unwrap();
    let shown = session.evaluate_pending(&settings);

    // Assert
    assert_eq!(accepted, 1);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].classification, Classification::Kill);
    assert_eq!(session.tally(), Tally { kills: 1, deaths: 0 });
}

#[test]
fn tracked_victim_scores_a_death() {
    let source = MemorySource::new(&[death_line(TS, "Alice", "Bob")]);
    let settings = settings("Alice", false, false);
    let mut session = ScanSession::new();

    session.scan(&source, &settings, None).unwrap();
    let shown = session.evaluate_pending(&settings);

    assert_eq!(shown[0].classification, Classification::Death);
    assert_eq!(session.tally(), Tally { kills: 0, deaths: 1 });
}

#[test]
fn npc_kill_is_filtered_and_uncounted() {
    let source = MemorySource::new(&[death_line(TS, "Alice", "NPC_Turret_01")]);
    let settings = settings("Alice", false, true);
    let mut session = ScanSession::new();

    session.scan(&source, &settings, None).unwrap();
    let shown = session.evaluate_pending(&settings);

    assert!(shown.is_empty());
    assert_eq!(session.events().len(), 1);
    assert_eq!(session.processed_count(), 0);
    assert_eq!(session.tally(), Tally::default());
}

#[test]
fn counted_events_are_never_counted_again() {
    // Arrange
    let source = MemorySource::new(&[
        death_line("2025-02-12T14:38:24.454Z", "Alice", "Bob"),
        death_line("2025-02-12T14:39:00.000Z", "Bob", "Eve"),
    ]);
    let settings = settings("Bob", false, true);
    let mut session = ScanSession::new();

    // Act
    for _ in 0..3 {
        session.scan(&source, &settings, None).unwrap();
        session.evaluate_pending(&settings);
    }
    let later = session.evaluate_pending(&settings);

    // Assert
    assert!(later.is_empty());
    assert_eq!(session.processed_count(), 2);
    assert_eq!(session.tally(), Tally { kills: 1, deaths: 1 });
}

#[test]
fn evaluated_events_carry_the_running_tally() {
    let source = MemorySource::new(&[
        death_line("2025-02-12T14:00:00.000Z", "Bob", "Eve"),
        death_line("2025-02-12T14:10:00.000Z", "Bob", "Mallory"),
    ]);
    let settings = settings("Bob", false, false);
    let mut session = ScanSession::new();

    session.scan(&source, &settings, None).unwrap();
    let shown = session.evaluate_pending(&settings);

    let deaths: Vec<_> = shown.iter().map(|e| e.tally.deaths).collect();
    assert_eq!(deaths, vec![1, 2]);
    // Newest first.
    assert_eq!(shown[0].event.killer, "Mallory");
}

#[test]
fn persistence_uses_the_session_token() {
    let source = MemorySource::new(&[death_line(TS, "Alice", "Bob")]);
    let settings = settings("Bob", false, true);
    let persistence = RecordingPersistence::default();
    let mut session = ScanSession::starting_at(Local.with_ymd_and_hms(2025, 2, 12, 9, 5, 0).unwrap());

    session.scan(&source, &settings, Some(&persistence)).unwrap();

    assert_eq!(session.token(), "250212-090500");
    assert_eq!(
        *persistence.written.lock().unwrap(),
        vec![("Alice".to_string(), "250212-090500".to_string())]
    );
}
