use std::ffi::OsStr;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use super::Executor;
use crate::fs::link::{remove_existing, symlink_in};
use crate::types::{ExecOutcome, PathStyle, Script, Step};

/// Performs script steps in-process with the current privileges.
///
/// Stops at the first failing step. When the script asks to retain its artifact, a
/// JSON-lines log of the attempted steps is written to `<artifact_dir>/<name>.log`.
#[derive(Clone, Debug)]
pub struct DirectExecutor {
    artifact_dir: PathBuf,
}

impl DirectExecutor {
    pub fn new(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
        }
    }

    fn write_log(&self, script: &Script, lines: &[String]) -> std::io::Result<PathBuf> {
        let path = self.artifact_dir.join(format!("{}.log", script.name));
        let mut f = std::fs::File::create(&path)?;
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(path)
    }
}

fn entered(cwd: Option<&PathBuf>) -> std::io::Result<&Path> {
    cwd.map(PathBuf::as_path).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "no directory entered")
    })
}

fn apply_step(step: &Step, cwd: &mut Option<PathBuf>) -> std::io::Result<()> {
    match step {
        Step::EnsureDir { path } => std::fs::create_dir_all(path),
        Step::EnterDir { path } => {
            // resolved once so later name-relative steps never cross a symlinked parent
            let p = std::fs::canonicalize(path)?;
            if !p.is_dir() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{path} is not a directory"),
                ));
            }
            *cwd = Some(p);
            Ok(())
        }
        Step::RemoveExisting { name } => remove_existing(entered(cwd.as_ref())?, OsStr::new(name)),
        Step::Symlink { name, target, .. } => {
            symlink_in(entered(cwd.as_ref())?, OsStr::new(name), OsStr::new(target))
        }
    }
}

impl Executor for DirectExecutor {
    fn run(&self, script: &Script) -> ExecOutcome {
        let mut outcome = ExecOutcome::success();
        let mut log: Vec<String> = Vec::new();

        if script.style != PathStyle::native() {
            outcome = ExecOutcome::failure(
                1,
                format!("{:?} paths cannot be applied on this host", script.style),
            );
        } else {
            let mut cwd: Option<PathBuf> = None;
            for step in &script.steps {
                let res = apply_step(step, &mut cwd);
                let mut entry = serde_json::to_value(step).unwrap_or_default();
                if let Some(obj) = entry.as_object_mut() {
                    obj.insert("ok".into(), res.is_ok().into());
                }
                log.push(entry.to_string());
                if let Err(e) = res {
                    outcome = ExecOutcome::failure(1, format!("{}: {e}", describe(step)));
                    break;
                }
            }
        }

        if script.retain {
            match self.write_log(script, &log) {
                Ok(p) => outcome.artifact = Some(p),
                Err(e) if outcome.is_success() => {
                    outcome = ExecOutcome::failure(1, format!("cannot write operation log: {e}"));
                }
                Err(_) => {}
            }
        }
        outcome
    }
}

fn describe(step: &Step) -> String {
    match step {
        Step::EnsureDir { path } => format!("create directory {path}"),
        Step::EnterDir { path } => format!("enter {path}"),
        Step::RemoveExisting { name } => format!("remove {name}"),
        Step::Symlink { name, target, .. } => format!("link {name} -> {target}"),
    }
}
