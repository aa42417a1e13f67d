use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a log for one read from the beginning. Implementations must not keep the handle
/// between calls.
pub trait LogSource: Send + Sync {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn BufRead + Send>>;
}

/// Reads the log from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn BufRead + Send>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
