#![forbid(unsafe_code)]
//! Linkyard: plan and apply batches of symbolic links.
//!
//! A run takes a list of source files or folders and a destination root, decides
//! for every (source, destination) pair what the link should store (absolute or
//! relative target), whether the name collides, and what to do about it, then hands
//! the ordered plan to an executor.
//!
//! - Planning is read-only: [`Linkyard::plan`] only probes the filesystem.
//! - Executors are swappable: [`adapters::ScriptExecutor`] renders a shell or batch
//!   script and runs it (optionally elevated), [`adapters::DirectExecutor`] performs
//!   the steps in-process through directory handles.

pub mod adapters;
pub mod api;
pub mod constants;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod render;
pub mod types;

pub use api::*;
