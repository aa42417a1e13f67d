use crate::classify::{Classification, Tally};
use crate::sink::{ChannelDisplay, DisplaySink, DisplayUpdate};
use crate::test_support::{TS, event};

#[test]
fn channel_display_forwards_updates_in_order() {
    // Arrange
    let (display, mut rx) = ChannelDisplay::new();
    let e = event(TS, "Alice", "Bob");
    let tally = Tally { kills: 1, deaths: 0 };

    // Act
    display.reset(true);
    display.show(&e, Classification::Kill, tally, true);

    // Assert
    assert!(matches!(
        rx.try_recv().unwrap(),
        DisplayUpdate::Reset {
            show_kill_count: true
        }
    ));
    match rx.try_recv().unwrap() {
        DisplayUpdate::Event {
            event,
            classification,
            tally: t,
            redacted,
        } => {
            assert_eq!(event, e);
            assert_eq!(classification, Classification::Kill);
            assert_eq!(t, tally);
            assert!(redacted);
        }
        other => panic!("unexpected update: {other:?}"),
    }
}

#[test]
fn channel_display_survives_a_dropped_receiver() {
    let (display, rx) = ChannelDisplay::new();
    drop(rx);

    display.reset(false);
    display.show(&event(TS, "Alice", "Bob"), Classification::Death, Tally::default(), false);
}
