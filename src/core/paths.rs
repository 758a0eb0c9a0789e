//! Project-relative locations used by the CLI.

use std::path::{Path, PathBuf};

/// Persisted project config written by `new`
pub const PROJECT_CONFIG: &str = ".jam-on/app/conf.json";

/// Optional CLI overrides for a project
pub const CLI_CONFIG: &str = ".jam-on/app/jam-on.json";

pub const GIT_DIR: &str = ".git";

pub fn project_config(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG)
}

pub fn cli_config(project_root: &Path) -> PathBuf {
    project_root.join(CLI_CONFIG)
}

pub fn git_dir(project_root: &Path) -> PathBuf {
    project_root.join(GIT_DIR)
}
