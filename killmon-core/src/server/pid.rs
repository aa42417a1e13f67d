use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the current process PID to a file.
pub fn write_pid<P: AsRef<Path>>(path: P) -> Result<()> {
    let pid = std::process::id();
    fs::write(&path, pid.to_string())
        .with_context(|| format!("failed to write pid file {}", path.as_ref().display()))?;
    Ok(())
}

pub fn read_pid<P: AsRef<Path>>(path: P) -> Result<i32> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read pid file {}", path.display()))?;

    contents
        .trim()
        .parse()
        .with_context(|| format!("invalid pid file contents in {}", path.display()))
}

/// Remove a pid file (best-effort).
pub fn remove_pid<P: AsRef<Path>>(path: P) {
    let _ = fs::remove_file(path);
}
