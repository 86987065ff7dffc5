use serde::Serialize;

/// Kind of filesystem node occupying a path, as seen without following symlinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Missing,
    File,
    Dir,
    Symlink,
    Unknown,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Missing => "missing",
            NodeKind::File => "file",
            NodeKind::Dir => "dir",
            NodeKind::Symlink => "symlink",
            NodeKind::Unknown => "unknown",
        }
    }

    /// Anything other than `Missing` occupies the path, dangling symlinks included.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, NodeKind::Missing)
    }
}
