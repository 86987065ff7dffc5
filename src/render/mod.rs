//! Serializers that turn a [`Script`] into text an interpreter can run.
//!
//! A renderer only formats; writing the artifact and running it belongs to
//! [`ScriptExecutor`](crate::adapters::ScriptExecutor).

use crate::types::Script;

pub mod cmd;
pub mod sh;

pub use cmd::CmdRenderer;
pub use sh::ShRenderer;

pub trait Renderer {
    fn render(&self, script: &Script) -> String;
    /// File extension of the artifact, without the dot.
    fn extension(&self) -> &'static str;
    /// Command prefix that runs an artifact passed as the final argument.
    fn interpreter(&self) -> Vec<String>;
}
