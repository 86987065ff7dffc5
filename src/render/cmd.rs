use std::fmt::Write;

use super::Renderer;
use crate::types::{Script, Step};

/// Windows batch rendering using `mklink`.
///
/// Each mutating line ends in `|| exit /b 1` so the first failure becomes the
/// script's exit status.
#[derive(Clone, Copy, Debug, Default)]
pub struct CmdRenderer;

impl Renderer for CmdRenderer {
    fn render(&self, script: &Script) -> String {
        let mut out = String::from("@echo off\r\n");
        for step in &script.steps {
            let _ = match step {
                Step::EnsureDir { path } => write!(
                    out,
                    "if not exist \"{path}\\\" mkdir \"{path}\" || exit /b 1\r\n"
                ),
                Step::EnterDir { path } => write!(out, "cd /d \"{path}\" || exit /b 1\r\n"),
                // `if exist` follows reparse points and misses dangling links, so the
                // removal is unguarded. `del` only runs once no directory is left.
                Step::RemoveExisting { name } => write!(
                    out,
                    "rmdir /s /q \"{name}\" 2>nul\r\n\
                     if not exist \"{name}\\\" del /f /q \"{name}\" 2>nul\r\n"
                ),
                Step::Symlink {
                    name,
                    target,
                    is_dir,
                } => write!(
                    out,
                    "mklink {}\"{name}\" \"{target}\" || exit /b 1\r\n",
                    if *is_dir { "/d " } else { "" }
                ),
            };
        }
        out
    }

    fn extension(&self) -> &'static str {
        "cmd"
    }

    fn interpreter(&self) -> Vec<String> {
        vec!["cmd".into(), "/C".into()]
    }
}
