use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";

pub fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| TS_ZERO.to_string())
}

/// Timestamp for facts emission: zero while planning so plan facts are
/// reproducible, wall clock while applying.
pub fn ts_for_stage(applying: bool) -> String {
    if applying {
        now_iso()
    } else {
        TS_ZERO.to_string()
    }
}

/// Apply redactions to a fact event for comparison and safe logging.
/// Zeroes timestamps and removes fields that vary from run to run.
pub fn redact_event(mut v: Value) -> Value {
    if let Some(obj) = v.as_object_mut() {
        obj.insert("ts".into(), Value::String(TS_ZERO.to_string()));
        obj.remove("duration_ms");
        obj.remove("artifact");
        if obj.contains_key("stderr") {
            obj.insert("stderr".into(), Value::String("***".into()));
        }
    }
    v
}
