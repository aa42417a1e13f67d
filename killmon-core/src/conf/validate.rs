use crate::conf::error::ValidationError;
use crate::conf::types::ConfigFile;

/// Check a parsed config file, collecting every violation.
pub fn validate(file: &ConfigFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if file.monitor.handle.trim().is_empty() {
        errors.push(ValidationError::EmptyHandle);
    }

    if file.monitor.interval < 1 {
        errors.push(ValidationError::InvalidInterval {
            interval: file.monitor.interval,
        });
    }

    let channel = file.monitor.channel;
    if file.channels.path(channel).trim().is_empty() {
        errors.push(ValidationError::MissingChannelPath { channel });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
