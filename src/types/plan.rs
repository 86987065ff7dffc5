use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};
use super::node::NodeKind;

/// Separator convention used when splitting and joining path strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Backslash-separated, drive-letter rooted (`C:\dir\name`).
    Windows,
    /// Slash-separated (`/dir/name`).
    Posix,
}

impl PathStyle {
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            PathStyle::Windows => '\\',
            PathStyle::Posix => '/',
        }
    }

    /// Style of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

/// Per-run switches. Immutable for the lifetime of one plan build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub use_relative_path: bool,
    /// Keep the executor's operation artifact (script or log) after the run.
    pub retain_operation_log: bool,
    pub replicate_to_fixed_subfolders: bool,
    pub overwrite_existing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_relative_path: true,
            retain_operation_log: false,
            replicate_to_fixed_subfolders: false,
            overwrite_existing: false,
        }
    }
}

/// A batch request: sources to link, where to link them, and how.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    #[serde(rename = "sourceFileOrFolderList")]
    pub sources: Vec<String>,
    #[serde(rename = "destinationPath")]
    pub destination: String,
    #[serde(flatten)]
    pub options: Options,
}

impl PlanInput {
    pub fn new(sources: Vec<String>, destination: impl Into<String>) -> Self {
        Self {
            sources,
            destination: destination.into(),
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Parse a request document in YAML form.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the document does not match the request shape.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| Error::invalid_input(e.to_string()))
    }

    /// Parse a request document in JSON form.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the document does not match the request shape.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::invalid_input(e.to_string()))
    }
}

/// One requested source entry, captured at plan-build time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkSpec {
    pub source: String,
    pub is_dir: bool,
    pub source_kind: NodeKind,
}

/// A resolved directory that receives links. Never carries a trailing separator
/// unless it is a bare filesystem root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DestinationDirectory {
    pub path: String,
}

impl DestinationDirectory {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    Create,
    /// Link path already occupied and overwriting is disabled.
    Skip,
    /// Link path already occupied; remove whatever is there, then create.
    ReplaceThenCreate,
}

impl LinkAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkAction::Create => "create",
            LinkAction::Skip => "skip",
            LinkAction::ReplaceThenCreate => "replace_then_create",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkOperation {
    /// Link name inside the destination directory (last segment of the source).
    pub name: String,
    /// String stored in the link: the source path or a relative path to it.
    pub target: String,
    /// Full prospective path of the link.
    pub link_path: String,
    pub source: String,
    pub is_dir: bool,
    pub action: LinkAction,
    pub existing_kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationGroup {
    pub directory: DestinationDirectory,
    pub operations: Vec<LinkOperation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub style: PathStyle,
    pub options: Options,
    pub sources: Vec<LinkSpec>,
    pub directories: Vec<DestinationDirectory>,
    pub groups: Vec<OperationGroup>,
}

impl Plan {
    /// All operations in plan order (destinations outer, sources inner).
    pub fn operations(&self) -> impl Iterator<Item = &LinkOperation> {
        self.groups.iter().flat_map(|g| g.operations.iter())
    }

    #[must_use]
    pub fn count(&self, action: LinkAction) -> usize {
        self.operations().filter(|op| op.action == action).count()
    }
}
