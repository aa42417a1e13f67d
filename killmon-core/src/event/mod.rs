mod format;
mod parse;


pub use format::{REDACTED, format};
pub use parse::{DEATH_MARKER, ParseError, extract_value, parse_line};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Namespace for event identifiers. Changing it changes every identifier ever derived.
const EVENT_NAMESPACE: Uuid = Uuid::from_u128(0x8c4e_2f1a_5b7d_4e0c_9a63_d21f_07b5_e9c4);

/// Stable identifier of a kill event, derived from the raw timestamp text of its log line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Name-based (SHA-1) identifier over the timestamp bytes.
    ///
    /// Byte-identical timestamp text always yields the same identifier, across runs and
    /// processes. Two log lines with the same timestamp are treated as the same event even
    /// if every other field differs.
    pub fn from_timestamp_text(timestamp: &str) -> Self {
        EventId(Uuid::new_v5(&EVENT_NAMESPACE, timestamp.as_bytes()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single `<Actor Death>` record.
///
/// Equality and hashing consider only [`EventId`]; all other fields are payload.
#[derive(Debug, Clone, Serialize)]
pub struct KillEvent {
    pub id: EventId,
    pub timestamp: DateTime<FixedOffset>,
    pub killed_player: String,
    pub killer: String,
    pub weapon: String,
    pub weapon_class: String,
    pub damage_type: String,
    pub zone: String,
}

impl KillEvent {
    /// True when either participant is `handle`, compared case-insensitively.
    pub fn involves(&self, handle: &str) -> bool {
        same_handle(&self.killed_player, handle) || same_handle(&self.killer, handle)
    }
}

impl PartialEq for KillEvent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for KillEvent {}

impl Hash for KillEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Case-insensitive player handle comparison.
pub fn same_handle(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}
