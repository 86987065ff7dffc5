use log::Level;
use serde_json::Value;

/// Receives structured facts, one JSON object per event.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Receives human-readable progress lines.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards everything.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards facts and audit lines to the `log` facade under the `linkyard` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl FactsEmitter for LogSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        let level = match decision {
            "failure" => Level::Error,
            "warn" => Level::Warn,
            _ => Level::Debug,
        };
        log::log!(target: "linkyard", level, "{subsystem}.{event} {decision} {fields}");
    }
}

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(target: "linkyard", level, "{msg}");
    }
}
