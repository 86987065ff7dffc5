//! Executor input: a flat, ordered list of steps lowered from a [`Plan`].
//!
//! Lowering order:
//! 1. one `EnsureDir` per destination directory, in plan order;
//! 2. per operation group, an `EnterDir` followed by the group's link steps.
//!
//! `Skip` operations lower to nothing. A `ReplaceThenCreate` operation lowers to
//! `RemoveExisting` immediately followed by `Symlink` for the same name.
use serde::Serialize;

use super::plan::{LinkAction, PathStyle, Plan};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    EnsureDir { path: String },
    /// Make `path` the working directory for the following name-relative steps.
    EnterDir { path: String },
    /// Remove whatever occupies `name`: directory, file, or symlink of either kind.
    RemoveExisting { name: String },
    Symlink {
        name: String,
        target: String,
        is_dir: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    /// Artifact base name, without extension.
    pub name: String,
    /// Keep the artifact after execution.
    pub retain: bool,
    pub style: PathStyle,
    pub steps: Vec<Step>,
}

/// Lower a plan into executor steps.
#[must_use]
pub fn lower(plan: &Plan, name: impl Into<String>) -> Script {
    let mut steps = Vec::new();
    for dir in &plan.directories {
        steps.push(Step::EnsureDir {
            path: dir.as_str().to_string(),
        });
    }
    for group in &plan.groups {
        if group.operations.iter().all(|op| op.action == LinkAction::Skip) {
            continue;
        }
        steps.push(Step::EnterDir {
            path: group.directory.as_str().to_string(),
        });
        for op in &group.operations {
            match op.action {
                LinkAction::Skip => continue,
                LinkAction::ReplaceThenCreate => steps.push(Step::RemoveExisting {
                    name: op.name.clone(),
                }),
                LinkAction::Create => {}
            }
            steps.push(Step::Symlink {
                name: op.name.clone(),
                target: op.target.clone(),
                is_dir: op.is_dir,
            });
        }
    }
    Script {
        name: name.into(),
        retain: plan.options.retain_operation_log,
        style: plan.style,
        steps,
    }
}

impl Script {
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Symlink { .. }))
            .count()
    }
}
