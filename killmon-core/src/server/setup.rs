use crate::conf::{ValidatedConfig, load_config};
use crate::scan::{FileLogSource, LogSource};
use crate::scheduler::{ScanScheduler, SchedulerState};
use crate::server::pid;
use crate::server::reload::ReloadHandle;
use crate::settings::{SettingsHub, forward_changes};
use crate::sink::{ConsoleDisplay, Sinks, TracingAlert};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// Run the monitor in the foreground until Ctrl-C.
pub fn run(config_path: PathBuf, config: ValidatedConfig) -> Result<()> {
    use tokio::runtime::Builder;

    let pid_file = config.pid_file().map(|p| p.to_path_buf());

    // Attempt to write pid file (best-effort)
    if let Some(pid_file) = &pid_file {
        if let Err(e) = pid::write_pid(pid_file) {
            tracing::warn!(error = %e, pid_file = %pid_file.display(), "failed to write pid file; continuing");
        } else {
            tracing::info!(pid_file = %pid_file.display(), "pid file written");
        }
    }

    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        tracing::info!("shutdown requested");
        let _ = shutdown_tx.send(true);
    })?;

    let reload = ReloadHandle::new();
    let sinks = Sinks::new(
        Arc::new(ConsoleDisplay::new()),
        Arc::new(TracingAlert::new().with_stderr()),
    );

    let result = rt.block_on(async {
        #[cfg(unix)]
        tokio::spawn({
            let reload = reload.clone();
            async move {
                if let Err(e) = reload.install_signal_handler().await {
                    tracing::warn!(error = %e, "SIGHUP handler not installed; reload disabled");
                }
            }
        });

        Monitor {
            config_path,
            config,
            source: Arc::new(FileLogSource),
            sinks,
            reload,
            shutdown: shutdown_rx,
        }
        .run()
        .await
    });

    if let Some(pid_file) = &pid_file {
        pid::remove_pid(pid_file);
    }

    let final_state = result?;
    tracing::info!(?final_state, "killmon stopped");
    if final_state == SchedulerState::Failed {
        anyhow::bail!("monitoring stopped after a scan failure");
    }
    Ok(())
}

/// The long-running monitor: one scheduler whose session is reset on every effective
/// settings change.
pub struct Monitor {
    pub config_path: PathBuf,
    pub config: ValidatedConfig,
    pub source: Arc<dyn LogSource>,
    pub sinks: Sinks,
    /// Each notification re-reads `config_path`.
    pub reload: ReloadHandle,
    /// Flips to `true` to end the monitor.
    pub shutdown: watch::Receiver<bool>,
}

impl Monitor {
    /// Runs until shutdown is requested or a scan session fails; returns the final
    /// scheduler state.
    pub async fn run(self) -> Result<SchedulerState> {
        let Monitor {
            config_path,
            config,
            source,
            sinks,
            reload,
            mut shutdown,
        } = self;

        let hub = SettingsHub::new(config.settings);
        let (listener, mut changes) = forward_changes();
        hub.register(listener);

        let mut scheduler = ScanScheduler::new(hub.current().as_ref().clone(), source, sinks);
        let mut state_rx = scheduler.subscribe();
        let mut reload_rx = reload.subscribe();
        scheduler.start();

        tracing::info!(config = %config_path.display(), "monitor started");

        loop {
            tokio::select! {
                Some(settings) = changes.recv() => {
                    scheduler.reset(settings).await;
                }

                Ok(()) = reload_rx.changed() => {
                    let epoch = reload_rx.borrow_and_update().epoch;
                    match load_config(&config_path) {
                        Ok(cfg) => {
                            if !hub.update(cfg.settings) {
                                tracing::info!(epoch, "config reloaded, settings unchanged");
                            }
                        }
                        Err(e) => {
                            tracing::error!(epoch, error = %e, "reload failed; keeping current settings");
                        }
                    }
                }

                Ok(()) = state_rx.changed() => {
                    if *state_rx.borrow_and_update() == SchedulerState::Failed {
                        break;
                    }
                }

                _ = shutdown_requested(&mut shutdown) => {
                    break;
                }
            }
        }

        Ok(scheduler.stop().await)
    }
}

/// Resolves once the flag flips to `true` or its sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}
