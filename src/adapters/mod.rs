pub mod executor;
pub mod probe;

pub use executor::{DirectExecutor, Executor, ScriptExecutor};
pub use probe::{FsProbe, StdFsProbe};
