use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `game.log` in its own temp directory, rewritten in full on every change.
pub struct GameLog {
    dir: TempDir,
    path: PathBuf,
    lines: Vec<String>,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLog {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("game.log");
        let log = Self {
            dir,
            path,
            lines: vec![
                "<2025-02-12T14:30:00.000Z> Log started on Wed Feb 12 14:30:00 2025".to_string(),
                "<2025-02-12T14:30:01.000Z> [Notice] <Join PU> address[1.2.3.4] port[64300]"
                    .to_string(),
            ],
        };
        log.flush();
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.flush();
    }

    /// Rewrite the file with exactly `lines`, as after a game restart.
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.flush();
    }

    pub fn remove(&self) {
        fs::remove_file(&self.path).expect("failed to remove game log");
    }

    fn flush(&self) {
        let mut text = self.lines.join("\r\n");
        text.push_str("\r\n");
        fs::write(&self.path, text).expect("failed to write game log");
    }
}

/// An `<Actor Death>` line shaped like the game writes it.
pub fn death_line(timestamp: &str, victim: &str, killer: &str) -> String {
    format!(
        "<{timestamp}> [Notice] <Actor Death> CActor::Kill: '{victim}' [200146295176] \
         in zone 'Stanton' killed by '{killer}' [200146295177] using 'Rifle' \
         [Class Ballistic] with damage type 'Bullet' from direction x: 0.1, y: 0.2, z: 0.3 \
         [Team_ActorTech][Actor]"
    )
}

/// Write `<dir>/killmon.hcl` monitoring `log` on the custom channel with a one second
/// interval. `extra` is appended verbatim.
pub fn write_config(dir: &Path, handle: &str, log: &Path, extra: &str) -> PathBuf {
    let path = dir.join("killmon.hcl");
    let body = format!(
        r#"
monitor {{
  handle   = "{handle}"
  interval = 1
  channel  = "custom"
}}

channels {{
  custom = "{log}"
}}

{extra}
"#,
        log = log.display(),
    );
    fs::write(&path, body).expect("failed to write config");
    path
}
