//! Replace a project's toolkit-owned ("core") paths with those of a newer
//! toolkit release.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::{files, git};

/// Toolkit-owned paths, relative to both the clone and the project root,
/// replaced in this order.
pub const CORE_PATHS: &[&str] = &[
    "src/_data/core",
    "src/_includes/core",
    "src/assets/img/core",
    "src/assets/css/core",
    "src/assets/js/core",
    "src/assets/vendor",
    ".core-eleventy.js",
    ".jam-on/core",
    "jam-on.mjs",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// The `(clone path, project path)` pairs for every core path.
pub fn core_file_list(clone_dir: &Path, project_root: &Path) -> Vec<CoreFile> {
    CORE_PATHS
        .iter()
        .map(|rel| CoreFile {
            source: clone_dir.join(rel),
            destination: project_root.join(rel),
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub command: &'static str,
    pub reference: String,
    pub repo: String,
    pub temp_dir: String,
    pub replaced: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub aborted: bool,
}

impl UpdateResult {
    pub fn aborted(reference: &str, repo: &str) -> Self {
        Self {
            command: "update",
            reference: reference.to_string(),
            repo: repo.to_string(),
            temp_dir: String::new(),
            replaced: Vec::new(),
            aborted: true,
        }
    }
}

/// Temporary clone directory, removed when dropped.
struct CloneDir {
    path: PathBuf,
    removed: bool,
}

impl CloneDir {
    fn new(project_root: &Path) -> Self {
        Self {
            path: project_root.join(uuid::Uuid::new_v4().to_string()),
            removed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Remove now, surfacing any error instead of swallowing it in Drop.
    fn remove(mut self) -> Result<()> {
        self.removed = true;
        files::remove_path(&self.path).map(|_| ())
    }
}

impl Drop for CloneDir {
    fn drop(&mut self) {
        if !self.removed {
            let _ = files::remove_path(&self.path);
        }
    }
}

fn validate_reference(reference: &str) -> Result<()> {
    if reference.trim().is_empty() {
        return Err(Error::validation_missing_argument(vec![
            "tagOrBranch".to_string(),
        ]));
    }
    if reference.starts_with('-') {
        return Err(Error::validation_invalid_argument(
            "tagOrBranch",
            "tag or branch cannot start with '-'",
            Some(reference.to_string()),
            None,
        ));
    }
    Ok(())
}

/// Clone `reference` of `repo` and overwrite every core path in `project_root`.
///
/// Nothing in the project is touched unless the clone succeeds and contains
/// every core path. The temporary clone is removed on every exit path.
pub fn run(project_root: &Path, reference: &str, repo: &str) -> Result<UpdateResult> {
    validate_reference(reference)?;

    let project_root = std::path::absolute(project_root).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("resolve {}", project_root.display())),
        )
    })?;
    let project_root = project_root.as_path();

    let clone = CloneDir::new(project_root);
    log_status!("update", "Updating to branch/tag: {}", reference);

    git::shallow_clone(repo, reference, clone.path())?;
    log_status!(
        "update",
        "Checked out tag/branch {} to temporary directory {}",
        reference,
        clone.name()
    );

    let core_files = core_file_list(clone.path(), project_root);
    let missing: Vec<String> = core_files
        .iter()
        .zip(CORE_PATHS)
        .filter(|(file, _)| !file.source.exists())
        .map(|(_, rel)| rel.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::update_missing_core_path(reference, missing));
    }

    let mut replaced = Vec::with_capacity(core_files.len());
    for (file, rel) in core_files.iter().zip(CORE_PATHS) {
        log_status!("update", "Replacing {} with {}", rel, file.source.display());
        files::replace_path(&file.source, &file.destination)?;
        replaced.push(rel.to_string());
    }

    let temp_dir = clone.name();
    clone.remove()?;
    log_status!("update", "Removed temporary directory {}", temp_dir);

    Ok(UpdateResult {
        command: "update",
        reference: reference.to_string(),
        repo: repo.to_string(),
        temp_dir,
        replaced,
        aborted: false,
    })
}
