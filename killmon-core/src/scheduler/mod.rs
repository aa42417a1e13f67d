//! Periodic scanning on a single background task.
//!
//! ```text
//! Idle ──start──▶ Running ──stop──▶ Stopped
//!                    │
//!                    └──scan failure──▶ Failed
//! ```
//!
//! Stopping only interrupts the wait between cycles; a cycle in progress always runs to
//! completion. A failed session is never retried; it takes an explicit `start` or `reset`.

mod task;


use crate::scan::LogSource;
use crate::settings::MonitorSettings;
use crate::sink::Sinks;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
    Failed,
}

impl SchedulerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SchedulerState::Stopped | SchedulerState::Failed)
    }
}

struct SessionTask {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<SchedulerState>,
}

pub struct ScanScheduler {
    settings: MonitorSettings,
    source: Arc<dyn LogSource>,
    sinks: Sinks,
    state: Arc<watch::Sender<SchedulerState>>,
    task: Option<SessionTask>,
}

impl ScanScheduler {
    pub fn new(settings: MonitorSettings, source: Arc<dyn LogSource>, sinks: Sinks) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        Self {
            settings,
            source,
            sinks,
            state: Arc::new(state),
            task: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.subscribe()
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Launch a fresh session on the current Tokio runtime.
    ///
    /// Does nothing while a session is running.
    pub fn start(&mut self) {
        if self.state() == SchedulerState::Running {
            tracing::warn!("scan already running, start ignored");
            return;
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        self.state.send_replace(SchedulerState::Running);

        let ctx = task::SessionContext {
            settings: self.settings.clone(),
            source: self.source.clone(),
            sinks: self.sinks.clone(),
            state: self.state.clone(),
        };
        let handle = tokio::spawn(task::run_session(ctx, stop_rx));

        self.task = Some(SessionTask { stop_tx, handle });
    }

    /// Cancel the running session and wait for its task to exit.
    ///
    /// A session that already failed stays `Failed`.
    pub async fn stop(&mut self) -> SchedulerState {
        let Some(task) = self.task.take() else {
            return self.state();
        };

        let _ = task.stop_tx.send(true);
        self.join(task.handle).await
    }

    /// Stop, discard all session state, and start over with `settings`.
    pub async fn reset(&mut self, settings: MonitorSettings) {
        let previous = self.stop().await;
        tracing::info!(?previous, handle = %settings.handle, "resetting scan session");

        self.settings = settings;
        self.start();
    }

    /// Wait until the session ends on its own (only a failure ends it).
    pub async fn wait(&mut self) -> SchedulerState {
        match self.task.take() {
            Some(task) => self.join(task.handle).await,
            None => self.state(),
        }
    }

    async fn join(&self, handle: JoinHandle<SchedulerState>) -> SchedulerState {
        match handle.await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "scan task aborted");
                self.state.send_replace(SchedulerState::Failed);
                SchedulerState::Failed
            }
        }
    }
}

impl Drop for ScanScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.stop_tx.send(true);
        }
    }
}
