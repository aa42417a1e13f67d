use crate::settings::{Channel, ModeFlags};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const INSTALL_ROOT: &str = r"C:\Program Files\Roberts Space Industries\StarCitizen";

/// The `killmon.hcl` file as written by the user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub monitor: MonitorSection,

    #[serde(default)]
    pub modes: ModesSection,

    #[serde(default)]
    pub channels: ChannelPaths,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorSection {
    /// Tracked player handle.
    pub handle: String,

    /// Seconds between scans.
    #[serde(default = "default_interval")]
    pub interval: u64,

    #[serde(default)]
    pub channel: Channel,
}

fn default_interval() -> u64 {
    crate::settings::DEFAULT_INTERVAL.as_secs()
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ModesSection {
    pub show_all: bool,
    pub killer_mode: bool,
    pub streamer_mode: bool,
    pub write_to_file: bool,
}

impl From<ModesSection> for ModeFlags {
    fn from(m: ModesSection) -> Self {
        ModeFlags {
            show_all: m.show_all,
            killer_mode: m.killer_mode,
            streamer_mode: m.streamer_mode,
            write_to_file: m.write_to_file,
        }
    }
}

/// Log file per release channel. Unset channels fall back to the default install location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelPaths {
    pub live: String,
    pub ptu: String,
    pub eptu: String,
    pub hotfix: String,
    pub tech_preview: String,
    pub custom: String,
}

impl Default for ChannelPaths {
    fn default() -> Self {
        Self {
            live: default_log_path(Channel::Live),
            ptu: default_log_path(Channel::Ptu),
            eptu: default_log_path(Channel::Eptu),
            hotfix: default_log_path(Channel::Hotfix),
            tech_preview: default_log_path(Channel::TechPreview),
            custom: String::new(),
        }
    }
}

impl ChannelPaths {
    pub fn path(&self, channel: Channel) -> &str {
        match channel {
            Channel::Live => &self.live,
            Channel::Ptu => &self.ptu,
            Channel::Eptu => &self.eptu,
            Channel::Hotfix => &self.hotfix,
            Channel::TechPreview => &self.tech_preview,
            Channel::Custom => &self.custom,
        }
    }
}

/// Standard `game.log` location of a channel; empty for [`Channel::Custom`].
pub fn default_log_path(channel: Channel) -> String {
    match channel.install_dir() {
        Some(dir) => format!(r"{INSTALL_ROOT}\{dir}\game.log"),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSection {
    /// Directory receiving persisted kill events.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSection {
    /// Directory for daily rolling log files.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSection {
    /// Optional pid file path
    pub pid_file: Option<PathBuf>,
}
