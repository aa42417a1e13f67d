mod channel;
mod hub;

#[cfg(test)]
mod tests;

pub use channel::Channel;
pub use hub::{ListenerId, SettingsHub, SettingsListener, forward_changes};

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Display and counting switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModeFlags {
    /// Show self-kills and NPC/system events instead of filtering them.
    pub show_all: bool,
    /// Count and display kills made by the tracked handle.
    pub killer_mode: bool,
    /// Hide the killer's name in rendered output.
    pub streamer_mode: bool,
    /// Persist every newly accepted event.
    pub write_to_file: bool,
}

/// Everything a monitoring session reads from configuration.
///
/// Immutable for the lifetime of a session; a change produces a new value and a session
/// reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSettings {
    pub handle: String,
    #[serde(with = "interval_secs")]
    pub interval: Duration,
    pub channel: Channel,
    pub log_path: PathBuf,
    pub modes: ModeFlags,
    pub output_dir: PathBuf,
}

impl MonitorSettings {
    pub fn new(handle: impl Into<String>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            handle: handle.into(),
            interval: DEFAULT_INTERVAL,
            channel: Channel::Custom,
            log_path: log_path.into(),
            modes: ModeFlags::default(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_modes(mut self, modes: ModeFlags) -> Self {
        self.modes = modes;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

mod interval_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(interval: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(interval.as_secs())
    }
}
