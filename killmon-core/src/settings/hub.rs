use crate::settings::MonitorSettings;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// Receives the new settings after every effective change.
pub trait SettingsListener: Send + Sync {
    fn settings_changed(&self, settings: &MonitorSettings);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Current settings plus the observers interested in changes to them.
pub struct SettingsHub {
    current: ArcSwap<MonitorSettings>,
    listeners: Mutex<Vec<(ListenerId, Arc<dyn SettingsListener>)>>,
    next_id: AtomicU64,
}

impl SettingsHub {
    pub fn new(settings: MonitorSettings) -> Self {
        Self {
            current: ArcSwap::from_pointee(settings),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn current(&self) -> Arc<MonitorSettings> {
        self.current.load_full()
    }

    pub fn register(&self, listener: Arc<dyn SettingsListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unregister(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Store `settings` and notify every listener once.
    ///
    /// Returns false, without notifying, when the settings are unchanged.
    pub fn update(&self, settings: MonitorSettings) -> bool {
        if *self.current.load_full() == settings {
            tracing::debug!("settings unchanged, no notification");
            return false;
        }

        self.current.store(Arc::new(settings));
        let settings = self.current.load_full();

        // Snapshot so listeners may (un)register from inside the callback.
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| l.clone())
            .collect();

        tracing::info!(listeners = listeners.len(), "settings changed");
        for listener in listeners {
            listener.settings_changed(&settings);
        }
        true
    }
}

struct ForwardingListener {
    tx: mpsc::UnboundedSender<MonitorSettings>,
}

impl SettingsListener for ForwardingListener {
    fn settings_changed(&self, settings: &MonitorSettings) {
        if self.tx.send(settings.clone()).is_err() {
            tracing::debug!("settings receiver dropped");
        }
    }
}

/// Listener that forwards changes into a channel, for consumers living on an async task.
pub fn forward_changes() -> (
    Arc<dyn SettingsListener>,
    mpsc::UnboundedReceiver<MonitorSettings>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(ForwardingListener { tx }), rx)
}
