use crate::event::KillEvent;
use chrono::Utc;

/// Replaces the killer's name in redacted output.
pub const REDACTED: &str = "REDACTED";

const TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M:%S%.3f";

/// Render an event as a fixed-order, multi-line record.
///
/// With `redacted` set, the killer is replaced by [`REDACTED`]. The function is pure, so the
/// same event can be rendered both ways (e.g. to reveal a single redacted entry).
pub fn format(event: &KillEvent, redacted: bool) -> String {
    let killer = if redacted {
        REDACTED
    } else {
        event.killer.as_str()
    };

    [
        format!(
            "Kill Date = {} UTC",
            event.timestamp.with_timezone(&Utc).format(TIMESTAMP_FORMAT)
        ),
        format!("Killed Player = {}", event.killed_player),
        format!("Zone = {}", event.zone),
        format!("Killer = {killer}"),
        format!("Used Method/Weapon = {}", event.weapon),
        format!("Class = {}", event.weapon_class),
        format!("Damage Type = {}", event.damage_type),
    ]
    .join("\n")
}
