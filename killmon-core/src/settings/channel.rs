use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Game release channel; each has its own install directory and log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[default]
    Live,
    Ptu,
    Eptu,
    Hotfix,
    TechPreview,
    Custom,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Live => "live",
            Channel::Ptu => "ptu",
            Channel::Eptu => "eptu",
            Channel::Hotfix => "hotfix",
            Channel::TechPreview => "tech_preview",
            Channel::Custom => "custom",
        }
    }

    /// Directory name below the game's install root; `None` for user-supplied paths.
    pub fn install_dir(&self) -> Option<&'static str> {
        match self {
            Channel::Live => Some("LIVE"),
            Channel::Ptu => Some("PTU"),
            Channel::Eptu => Some("EPTU"),
            Channel::Hotfix => Some("HOTFIX"),
            Channel::TechPreview => Some("TECH-PREVIEW"),
            Channel::Custom => None,
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
