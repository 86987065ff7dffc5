use std::path::Path;

use crate::fs::meta::{is_dir_following, kind_of};
use crate::types::NodeKind;

/// Read-only view of the filesystem used for planning decisions.
pub trait FsProbe {
    /// Kind of node occupying `path`, without following a final symlink.
    fn kind(&self, path: &str) -> NodeKind;
    /// Whether `path` resolves to a directory, following symlinks.
    fn is_dir(&self, path: &str) -> bool;
}

/// Probe backed by the host filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFsProbe;

impl FsProbe for StdFsProbe {
    fn kind(&self, path: &str) -> NodeKind {
        kind_of(Path::new(path))
    }

    fn is_dir(&self, path: &str) -> bool {
        is_dir_following(Path::new(path))
    }
}
