use std::path::PathBuf;

use crate::constants::{AGENT_SKILL_SUBFOLDERS, DEFAULT_ARTIFACT_PREFIX};
use crate::types::PathStyle;

/// Process-level configuration for a [`Linkyard`](crate::Linkyard) instance.
///
/// Per-run switches live in [`Options`](crate::types::Options); this struct holds
/// what stays fixed across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    /// Sub-paths for replicate mode, each a list of segments joined with the
    /// active separator. Order is preserved and duplicates are kept.
    pub replica_subfolders: Vec<Vec<String>>,
    pub path_style: PathStyle,
    /// Where executors write their scripts or operation logs.
    pub artifact_dir: PathBuf,
    pub artifact_prefix: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self::agent_skills_preset()
    }
}

impl Policy {
    /// Replicate into the `.agent/skills`, `.agents/skills` and `.claude/skills`
    /// conventions, native separators, artifacts in the system temp directory.
    #[must_use]
    pub fn agent_skills_preset() -> Self {
        Self {
            replica_subfolders: AGENT_SKILL_SUBFOLDERS
                .iter()
                .map(|segs| segs.iter().map(|s| (*s).to_string()).collect())
                .collect(),
            path_style: PathStyle::native(),
            artifact_dir: std::env::temp_dir(),
            artifact_prefix: DEFAULT_ARTIFACT_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    /// Replace the replica sub-paths. Each entry is split on `/` or `\`.
    #[must_use]
    pub fn with_replica_subfolders<I, S>(mut self, subfolders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replica_subfolders = subfolders
            .into_iter()
            .map(|s| {
                s.as_ref()
                    .split(['/', '\\'])
                    .filter(|seg| !seg.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }
}
