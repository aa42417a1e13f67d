pub mod classify;
pub mod cli;
pub mod conf;
pub mod event;
pub mod logging;
pub mod scan;
pub mod scheduler;
pub mod server;
pub mod session;
pub mod settings;
pub mod sink;

#[cfg(test)]
mod test_support;
