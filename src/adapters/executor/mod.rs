use crate::types::{ExecOutcome, Script};

pub mod direct;
pub mod script;

pub use direct::DirectExecutor;
pub use script::ScriptExecutor;

/// Runs a lowered plan with whatever privileges link creation needs.
///
/// Implementations report failures as data: a non-zero `exit_status` plus the
/// captured error text. The caller decides what a failure means.
pub trait Executor {
    fn run(&self, script: &Script) -> ExecOutcome;
}
