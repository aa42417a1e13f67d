use crate::classify::{Classification, Tally};
use crate::event::{KillEvent, format};
use crate::sink::DisplaySink;
use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;

/// Prints every classified event to stdout.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    show_kill_count: AtomicBool,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn tally_line(&self, tally: Tally) -> String {
        if self.show_kill_count.load(Ordering::Relaxed) {
            format!("kills: {} | deaths: {}", tally.kills, tally.deaths)
        } else {
            format!("deaths: {}", tally.deaths)
        }
    }
}

impl DisplaySink for ConsoleDisplay {
    fn reset(&self, show_kill_count: bool) {
        self.show_kill_count.store(show_kill_count, Ordering::Relaxed);
        println!("{}", "── new monitoring session ──".dimmed());
    }

    fn show(&self, event: &KillEvent, classification: Classification, tally: Tally, redacted: bool) {
        let header = match classification {
            Classification::Kill => "KILL".green().bold().to_string(),
            Classification::Death => "DEATH".red().bold().to_string(),
            Classification::Suppressed(_) => return,
        };

        println!();
        println!("{header}");
        println!("{}", format(event, redacted));
        println!("{}", self.tally_line(tally).dimmed());
    }
}

/// A display instruction for a presentation context living elsewhere.
#[derive(Debug, Clone)]
pub enum DisplayUpdate {
    Reset {
        show_kill_count: bool,
    },
    Event {
        event: KillEvent,
        classification: Classification,
        tally: Tally,
        redacted: bool,
    },
}

/// Forwards display instructions over a channel without waiting for the receiver.
#[derive(Debug, Clone)]
pub struct ChannelDisplay {
    tx: mpsc::UnboundedSender<DisplayUpdate>,
}

impl ChannelDisplay {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DisplayUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, update: DisplayUpdate) {
        if self.tx.send(update).is_err() {
            tracing::debug!("display receiver dropped, update discarded");
        }
    }
}

impl DisplaySink for ChannelDisplay {
    fn reset(&self, show_kill_count: bool) {
        self.send(DisplayUpdate::Reset { show_kill_count });
    }

    fn show(&self, event: &KillEvent, classification: Classification, tally: Tally, redacted: bool) {
        self.send(DisplayUpdate::Event {
            event: event.clone(),
            classification,
            tally,
            redacted,
        });
    }
}
