mod fixtures;
pub mod monitor;
pub mod sinks;
pub mod tracing;

pub use fixtures::{GameLog, death_line, write_config};
pub use monitor::{TestMonitor, eventually};
pub use sinks::{Recorded, RecordingAlert, RecordingDisplay, RecordingPersistence};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
