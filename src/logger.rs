use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

use crate::diff::diff_json;

/// How response bodies are written to the message log.
pub enum MessageLogMode {
    /// Every body in full.
    Full,
    /// First body per endpoint in full, then only changed paths.
    Diffed,
}

pub(crate) struct MessageLogger {
    mode: MessageLogMode,
    file: File,
    previous_bodies: HashMap<String, Value>,
}

impl MessageLogger {
    pub fn new(mode: MessageLogMode, path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            mode,
            file,
            previous_bodies: HashMap::new(),
        })
    }

    pub fn log_request(&mut self, method: &str, path: &str) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "req",
            "method": method,
            "path": path,
        });
        self.write_line(&entry);
    }

    /// Log a response of any status. Bodies that are not JSON go under
    /// `raw` and never become a diff baseline.
    pub fn log_response(&mut self, path: &str, status: u16, body: &str) {
        let mut entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "resp",
            "path": path,
            "status": status,
        });

        match serde_json::from_str::<Value>(body) {
            Err(_) => entry["raw"] = Value::String(body.to_string()),
            Ok(parsed) => match self.mode {
                MessageLogMode::Full => entry["body"] = parsed,
                MessageLogMode::Diffed => {
                    match self.previous_bodies.insert(path.to_string(), parsed.clone()) {
                        None => {
                            entry["full"] = Value::Bool(true);
                            entry["body"] = parsed;
                        }
                        Some(prev) => {
                            let changes: Vec<Value> = diff_json(&prev, &parsed)
                                .into_iter()
                                .map(|c| json!({ "path": c.path, "old": c.old, "new": c.new }))
                                .collect();
                            entry["changes"] = Value::Array(changes);
                        }
                    }
                }
            },
        }

        self.write_line(&entry);
    }

    fn write_line(&mut self, entry: &Value) {
        if let Ok(line) = serde_json::to_string(entry)
            && let Err(e) = writeln!(self.file, "{line}")
        {
            warn!("failed to write log entry: {e}");
        }
    }
}
