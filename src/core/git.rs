use serde::Serialize;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::paths;
use crate::utils::command;

/// Version-control state of a project checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitState {
    /// No `.git` directory
    Absent,
    Clean,
    /// Uncommitted or untracked changes
    Dirty,
}

pub fn has_git_dir(path: &Path) -> bool {
    paths::git_dir(path).exists()
}

/// Determine the git state of `path`. A failing `git status` is an error,
/// never silently treated as clean.
pub fn detect_state(path: &Path) -> Result<GitState> {
    if !has_git_dir(path) {
        return Ok(GitState::Absent);
    }

    let output = execute_git(path, &["status", "--porcelain"])
        .map_err(|e| Error::git_command_failed(format!("Failed to run git status: {}", e)))?;

    if !output.status.success() {
        return Err(Error::git_command_failed(format!(
            "git status failed: {}",
            command::error_text(&output)
        )));
    }

    if output.stdout.iter().all(|b| b.is_ascii_whitespace()) {
        Ok(GitState::Clean)
    } else {
        Ok(GitState::Dirty)
    }
}

/// Clone a single branch or tag of `url` into `target` with `--depth 1`.
///
/// git runs from the parent of `target` and is given only its final
/// component, so relative targets land where the caller expects.
pub fn shallow_clone(url: &str, reference: &str, target: &Path) -> Result<()> {
    let cwd = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let target_arg = target
        .file_name()
        .map(|name| name.to_string_lossy())
        .ok_or_else(|| {
            Error::validation_invalid_argument(
                "target",
                "Clone target must name a directory",
                Some(target.display().to_string()),
                None,
            )
        })?;

    let output = execute_git(
        cwd,
        &[
            "clone",
            "--depth",
            "1",
            "--branch",
            reference,
            "--",
            url,
            &target_arg,
        ],
    )
    .map_err(|e| Error::git_command_failed(format!("Failed to run git clone: {}", e)))?;

    if !output.status.success() {
        return Err(Error::git_command_failed(format!(
            "Error cloning {} at '{}': {}",
            url,
            reference,
            command::error_text(&output)
        ))
        .with_hint("Check the repository URL and that the tag or branch exists"));
    }

    Ok(())
}

fn execute_git(path: &Path, args: &[&str]) -> std::io::Result<std::process::Output> {
    Command::new("git")
        .args(args)
        .current_dir(path)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
}
