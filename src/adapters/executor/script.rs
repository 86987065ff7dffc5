use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use super::Executor;
use crate::constants::{EXIT_LAUNCH_FAILED, EXIT_TERMINATED};
use crate::render::Renderer;
use crate::types::{ExecOutcome, Script};

/// Writes the script to disk with a [`Renderer`] and runs it through an interpreter,
/// optionally behind an elevation command such as `sudo -n`.
///
/// The artifact is `<artifact_dir>/<name>.<ext>`; it is deleted after the run unless
/// the script asks to retain it.
#[derive(Clone, Debug)]
pub struct ScriptExecutor<R: Renderer> {
    renderer: R,
    artifact_dir: PathBuf,
    elevation: Vec<String>,
}

impl<R: Renderer> ScriptExecutor<R> {
    pub fn new(renderer: R, artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            artifact_dir: artifact_dir.into(),
            elevation: Vec::new(),
        }
    }

    /// Prefix the interpreter invocation with `cmd`, e.g. `["sudo", "-n"]`.
    #[must_use]
    pub fn with_elevation<I, S>(mut self, cmd: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elevation = cmd.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn artifact_path(&self, script: &Script) -> PathBuf {
        self.artifact_dir
            .join(format!("{}.{}", script.name, self.renderer.extension()))
    }
}

/// A child without an exit code was stopped by a signal; say which one.
fn outcome_of(status: ExitStatus, mut stderr: String) -> ExecOutcome {
    if let Some(code) = status.code() {
        return ExecOutcome {
            exit_status: code,
            stderr,
            artifact: None,
        };
    }
    if !stderr.is_empty() && !stderr.ends_with('\n') {
        stderr.push('\n');
    }
    stderr.push_str(&format!("interpreter terminated by {}", termination(status)));
    ExecOutcome::failure(EXIT_TERMINATED, stderr)
}

#[cfg(unix)]
fn termination(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    status
        .signal()
        .map_or_else(|| "an unknown signal".to_string(), |sig| format!("signal {sig}"))
}

#[cfg(not(unix))]
fn termination(_status: ExitStatus) -> String {
    "an unknown cause".to_string()
}

impl<R: Renderer> Executor for ScriptExecutor<R> {
    fn run(&self, script: &Script) -> ExecOutcome {
        let path = self.artifact_path(script);
        if let Err(e) = std::fs::write(&path, self.renderer.render(script)) {
            return ExecOutcome::failure(
                EXIT_LAUNCH_FAILED,
                format!("cannot write {}: {e}", path.display()),
            );
        }

        let mut argv: Vec<String> = self.elevation.clone();
        argv.extend(self.renderer.interpreter());
        let (program, args) = argv.split_first().map_or(("sh", &[][..]), |(p, a)| (p.as_str(), a));
        let mut outcome = match Command::new(program).args(args).arg(&path).output() {
            Ok(out) => outcome_of(out.status, String::from_utf8_lossy(&out.stderr).into_owned()),
            Err(e) => ExecOutcome::failure(EXIT_LAUNCH_FAILED, format!("cannot run {program}: {e}")),
        };

        if script.retain {
            outcome.artifact = Some(path);
        } else {
            let _ = std::fs::remove_file(&path);
        }
        outcome
    }
}
