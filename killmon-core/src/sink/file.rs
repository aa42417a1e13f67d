use crate::event::{KillEvent, format};
use crate::sink::{PersistenceSink, SinkError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends unredacted records to `<dir>/killmon-<session token>.txt`.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_path(&self, session_token: &str) -> PathBuf {
        self.dir.join(format!("killmon-{session_token}.txt"))
    }
}

impl PersistenceSink for FilePersistence {
    fn write(&self, event: &KillEvent, session_token: &str) -> Result<(), SinkError> {
        let path = self.file_path(session_token);

        fs::create_dir_all(&self.dir).map_err(|e| SinkError::io(&self.dir, e))?;
        append(&path, &format(event, false)).map_err(|e| SinkError::io(&path, e))?;

        tracing::debug!(event_id = %event.id, path = %path.display(), "kill event written");
        Ok(())
    }
}

fn append(path: &Path, record: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{record}\n")?;
    file.flush()
}
