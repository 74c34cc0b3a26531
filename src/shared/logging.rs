use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Info,
    Warn,
    Error,
}

impl EventLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for EventLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic raised while loading or resolving the menu. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEvent {
    pub level: EventLevel,
    pub event: String,
    pub message: String,
}

impl NavEvent {
    pub fn new(level: EventLevel, event: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            event: event.into(),
            message: message.into(),
        }
    }

    pub fn info(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventLevel::Info, event, message)
    }

    pub fn warn(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventLevel::Warn, event, message)
    }

    pub fn error(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EventLevel::Error, event, message)
    }
}

pub fn nav_log_line(event: &NavEvent) -> Option<String> {
    let payload = serde_json::json!({
        "timestamp": chrono::Utc::now().timestamp(),
        "level": event.level.as_str(),
        "event": event.event,
        "message": event.message,
    });
    serde_json::to_string(&payload).ok()
}

pub fn append_nav_log(path: &Path, event: &NavEvent) {
    let Some(line) = nav_log_line(event) else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}

/// Optional JSON-line sink for [`NavEvent`]s. Writes are best-effort.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn record(&self, event: &NavEvent) {
        if let Some(path) = &self.path {
            append_nav_log(path, event);
        }
    }

    pub fn record_all<'a>(&self, events: impl IntoIterator<Item = &'a NavEvent>) {
        for event in events {
            self.record(event);
        }
    }
}
