use crate::harness::sinks::{RecordingAlert, RecordingDisplay, RecordingPersistence};
use crate::harness::tracing::init_test_tracing;
use killmon_core::conf::load_config;
use killmon_core::scan::FileLogSource;
use killmon_core::scheduler::SchedulerState;
use killmon_core::server::{Monitor, ReloadHandle};
use killmon_core::sink::Sinks;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};

/// A [`Monitor`] running on the test runtime with recording sinks.
pub struct TestMonitor {
    pub display: Arc<RecordingDisplay>,
    pub alert: Arc<RecordingAlert>,
    pub persistence: Option<Arc<RecordingPersistence>>,
    reload: ReloadHandle,
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<anyhow::Result<SchedulerState>>,
}

impl TestMonitor {
    pub fn start(config_path: &Path) -> Self {
        Self::spawn(config_path, None)
    }

    /// Like [`TestMonitor::start`], recording persisted events instead of writing files.
    pub fn start_recording_writes(config_path: &Path) -> Self {
        Self::spawn(config_path, Some(Arc::new(RecordingPersistence::default())))
    }

    fn spawn(config_path: &Path, persistence: Option<Arc<RecordingPersistence>>) -> Self {
        init_test_tracing();

        let config = load_config(config_path).expect("failed to load test config");
        let display = Arc::new(RecordingDisplay::default());
        let alert = Arc::new(RecordingAlert::default());

        let mut sinks = Sinks::new(display.clone(), alert.clone());
        if let Some(p) = &persistence {
            sinks = sinks.with_persistence(p.clone());
        }

        let reload = ReloadHandle::new();
        let (shutdown, shutdown_rx) = watch::channel(false);

        let monitor = Monitor {
            config_path: config_path.to_path_buf(),
            config,
            source: Arc::new(FileLogSource),
            sinks,
            reload: reload.clone(),
            shutdown: shutdown_rx,
        };
        let handle = tokio::spawn(monitor.run());

        Self {
            display,
            alert,
            persistence,
            reload,
            shutdown,
            handle,
        }
    }

    pub fn reload(&self) {
        self.reload.notify_reload();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Request shutdown and return the final scheduler state.
    pub async fn shutdown(self) -> SchedulerState {
        let _ = self.shutdown.send(true);
        self.join().await
    }

    /// Wait for the monitor to end on its own.
    pub async fn join(self) -> SchedulerState {
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("monitor did not finish in time")
            .expect("monitor task panicked")
            .expect("monitor returned an error")
    }
}

/// Poll `cond` until it holds or `within` elapses.
pub async fn eventually(within: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + within;
    loop {
        if cond() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        sleep(Duration::from_millis(20)).await;
    }
}
