use std::path::PathBuf;

use uuid::Uuid;

/// What an executor reports back after running a script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub exit_status: i32,
    /// Captured error text; empty on success.
    pub stderr: String,
    /// Path of the operation artifact when it was kept.
    pub artifact: Option<PathBuf>,
}

impl ExecOutcome {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(exit_status: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_status,
            stderr: stderr.into(),
            artifact: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_status == 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct ApplyReport {
    pub plan_uuid: Option<Uuid>,
    /// Number of script steps handed to the executor.
    pub steps: usize,
    pub created: usize,
    pub replaced: usize,
    pub skipped: usize,
    pub exit_status: i32,
    pub stderr: String,
    pub artifact: Option<PathBuf>,
    pub duration_ms: u64,
}
