use crate::server::read_pid;
use anyhow::{Context, Result};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::path::Path;

/// Ask a running monitor to re-read its config by sending SIGHUP via its pid file.
pub fn run<P: AsRef<Path>>(pid_file: P) -> Result<()> {
    let pid = Pid::from_raw(read_pid(pid_file)?);

    kill(pid, Signal::SIGHUP).with_context(|| format!("failed to send SIGHUP to pid {}", pid))?;

    println!("Sent SIGHUP to killmon (pid {})", pid);

    Ok(())
}
