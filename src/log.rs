// src/log.rs
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Logging capability injected into the pipeline.
/// The pipeline records stage boundaries and failures through this;
/// the sink decides where the lines go.
pub trait EventLog {
    fn record(&self, level: Level, msg: &str);
}

/// A no-op sink for callers that don't care (tests, library embedding).
pub struct NullLog;
impl EventLog for NullLog {
    fn record(&self, _level: Level, _msg: &str) {}
}

/// Append-only file sink, one timestamped line per record.
pub struct FileLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLog { path: path.into(), lock: Mutex::new(()) }
    }
}

impl EventLog for FileLog {
    fn record(&self, level: Level, msg: &str) {
        let stamp = Local::now().format("%Y-%B-%d-%H-%M-%S");
        let line = format!("{stamp}, [{}] {msg}\n", level.tag());

        // Best-effort: a failing log write never fails the run.
        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}
