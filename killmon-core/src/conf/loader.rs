use crate::conf::error::ConfigError;
use crate::conf::types::ConfigFile;
use crate::conf::validate::validate;
use crate::settings::MonitorSettings;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "killmon.hcl";

/// A config file that passed validation, and the settings lowered from it.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedConfig {
    pub source: PathBuf,
    pub file: ConfigFile,
    pub settings: MonitorSettings,
}

impl ValidatedConfig {
    pub fn pid_file(&self) -> Option<&Path> {
        self.file.server.as_ref()?.pid_file.as_deref()
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.file.logging.as_ref().map(|l| l.dir.as_path())
    }
}

/// A directory means `<dir>/killmon.hcl`.
pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let path = resolve_config_path(path);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let file: ConfigFile = hcl::from_str(&text).map_err(|e| ConfigError::parse(&path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    validate(&file).map_err(|errors| ConfigError::Validation { errors })?;

    let settings = lower(&file);
    Ok(ValidatedConfig {
        source: path,
        file,
        settings,
    })
}

fn lower(file: &ConfigFile) -> MonitorSettings {
    let channel = file.monitor.channel;

    MonitorSettings {
        handle: file.monitor.handle.trim().to_owned(),
        interval: Duration::from_secs(file.monitor.interval),
        channel,
        log_path: PathBuf::from(file.channels.path(channel)),
        modes: file.modes.into(),
        output_dir: file
            .output
            .as_ref()
            .map(|o| o.dir.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}
