mod pid;
mod reload;
pub mod setup;


pub use pid::{read_pid, remove_pid, write_pid};
pub use reload::{ReloadEvent, ReloadHandle};
pub use setup::{Monitor, run};
