use crate::settings::{ModeFlags, MonitorSettings, SettingsHub, SettingsListener, forward_changes};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl SettingsListener for Recorder {
    fn settings_changed(&self, settings: &MonitorSettings) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(settings.handle.clone());
    }
}

fn settings(handle: &str) -> MonitorSettings {
    MonitorSettings::new(handle, "/tmp/game.log")
}

#[test]
fn update_notifies_each_listener_once() {
    // Arrange
    let hub = SettingsHub::new(settings("Alice"));
    let a = Arc::new(Recorder::default());
    let b = Arc::new(Recorder::default());
    hub.register(a.clone());
    hub.register(b.clone());

    // Act
    let changed = hub.update(settings("Bob"));

    // Assert
    assert!(changed);
    assert_eq!(a.calls.load(Ordering::SeqCst), 1);
    assert_eq!(b.calls.load(Ordering::SeqCst), 1);
    assert_eq!(*a.seen.lock().unwrap(), vec!["Bob".to_string()]);
    assert_eq!(hub.current().handle, "Bob");
}

#[test]
fn unchanged_settings_do_not_notify() {
    let hub = SettingsHub::new(settings("Alice"));
    let a = Arc::new(Recorder::default());
    hub.register(a.clone());

    assert!(!hub.update(settings("Alice")));
    assert_eq!(a.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn mode_change_is_a_change() {
    let hub = SettingsHub::new(settings("Alice"));
    let a = Arc::new(Recorder::default());
    hub.register(a.clone());

    let changed = hub.update(settings("Alice").with_modes(ModeFlags {
        show_all: true,
        ..ModeFlags::default()
    }));

    assert!(changed);
    assert_eq!(a.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unregistered_listener_is_not_notified() {
    // Arrange
    let hub = SettingsHub::new(settings("Alice"));
    let a = Arc::new(Recorder::default());
    let id = hub.register(a.clone());

    // Act
    let removed = hub.unregister(id);
    hub.update(settings("Bob"));

    // Assert
    assert!(removed);
    assert!(!hub.unregister(id));
    assert_eq!(a.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn forwarded_changes_arrive_in_order() {
    let hub = SettingsHub::new(settings("Alice"));
    let (listener, mut rx) = forward_changes();
    hub.register(listener);

    hub.update(settings("Bob"));
    hub.update(settings("Carol"));

    assert_eq!(rx.try_recv().unwrap().handle, "Bob");
    assert_eq!(rx.try_recv().unwrap().handle, "Carol");
    assert!(rx.try_recv().is_err());
}
