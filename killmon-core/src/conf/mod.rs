mod error;
mod loader;
mod types;
mod validate;


pub use error::{ConfigError, ValidationError};
pub use loader::{CONFIG_FILE_NAME, ValidatedConfig, load_config, resolve_config_path};
pub use types::{
    ChannelPaths, ConfigFile, LoggingSection, ModesSection, MonitorSection, OutputSection,
    ServerSection,
};
pub use validate::validate;
