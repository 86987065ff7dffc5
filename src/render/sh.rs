use std::fmt::Write;

use super::Renderer;
use crate::types::{Script, Step};

/// POSIX `sh` rendering using `ln -sn`. `set -e` stops at the first failing step.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShRenderer;

/// Single-quote `s` for the shell.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

impl Renderer for ShRenderer {
    fn render(&self, script: &Script) -> String {
        let mut out = String::from("#!/bin/sh\nset -e\n");
        for step in &script.steps {
            let _ = match step {
                Step::EnsureDir { path } => writeln!(out, "mkdir -p -- {}", quote(path)),
                Step::EnterDir { path } => writeln!(out, "cd -- {}", quote(path)),
                Step::RemoveExisting { name } => writeln!(out, "rm -rf -- {}", quote(name)),
                // is_dir has no bearing on POSIX symlinks. -n keeps an occupied name
                // that links to a directory from being descended into.
                Step::Symlink { name, target, .. } => {
                    writeln!(out, "ln -sn -- {} {}", quote(target), quote(name))
                }
            };
        }
        out
    }

    fn extension(&self) -> &'static str {
        "sh"
    }

    fn interpreter(&self) -> Vec<String> {
        vec!["sh".into()]
    }
}
