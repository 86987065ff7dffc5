//! Non-mutating filesystem probes used while planning and executing.
use std::path::Path;

use crate::types::NodeKind;

/// Classify the node at `path` without following a final symlink.
#[must_use]
pub fn kind_of(path: &Path) -> NodeKind {
    match std::fs::symlink_metadata(path) {
        Ok(md) => {
            let ft = md.file_type();
            if ft.is_symlink() {
                NodeKind::Symlink
            } else if ft.is_file() {
                NodeKind::File
            } else if ft.is_dir() {
                NodeKind::Dir
            } else {
                NodeKind::Unknown
            }
        }
        Err(_) => NodeKind::Missing,
    }
}

/// True when `path` resolves (following symlinks) to a directory.
#[must_use]
pub fn is_dir_following(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
