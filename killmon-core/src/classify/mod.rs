//! Kill / death classification for the tracked handle.
//!
//! Order of decisions for one event:
//!
//! 1. NPC / system participants are filtered unless show-all is on.
//! 2. The tracked handle as killer: a self-kill is a death under show-all (otherwise
//!    suppressed); killing someone else is a kill under killer-mode (otherwise suppressed).
//! 3. Anything else is a death.


use crate::event::{KillEvent, same_handle};
use crate::settings::ModeFlags;
use serde::Serialize;

/// Lower-case name fragments of synthetic, NPC and system actors.
pub const NON_PLAYER_MARKERS: &[&str] = &[
    "unknown",
    "aimodule",
    "pu_",
    "npc_",
    "kopion_",
    "missionentitystreamable_",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Kill,
    Death,
    Suppressed(Suppression),
}

impl Classification {
    pub fn is_counted(&self) -> bool {
        !matches!(self, Classification::Suppressed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suppression {
    NonPlayer,
    SelfKill,
    KillerModeOff,
}

/// Running counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub kills: u32,
    pub deaths: u32,
}

impl Tally {
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Kill => self.kills += 1,
            Classification::Death => self.deaths += 1,
            Classification::Suppressed(_) => {}
        }
    }
}

pub fn is_non_player(name: &str) -> bool {
    let name = name.to_lowercase();
    NON_PLAYER_MARKERS.iter().any(|m| name.contains(m))
}

pub fn involves_non_player(event: &KillEvent) -> bool {
    is_non_player(&event.killer) || is_non_player(&event.killed_player)
}

pub fn classify(event: &KillEvent, handle: &str, modes: &ModeFlags) -> Classification {
    if involves_non_player(event) && !modes.show_all {
        return Classification::Suppressed(Suppression::NonPlayer);
    }

    if same_handle(&event.killer, handle) {
        if same_handle(&event.killed_player, handle) {
            return if modes.show_all {
                Classification::Death
            } else {
                Classification::Suppressed(Suppression::SelfKill)
            };
        }

        return if modes.killer_mode {
            Classification::Kill
        } else {
            Classification::Suppressed(Suppression::KillerModeOff)
        };
    }

    // Also reached when the handle is not involved at all. The scanner never admits such
    // events, so in practice this is the victim case.
    Classification::Death
}
