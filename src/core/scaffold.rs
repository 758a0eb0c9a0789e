//! Turn a fresh toolkit checkout into a new project.
//!
//! Split in two so the command layer can prompt in between: [`prepare`]
//! clears the checkout, [`create_project`] writes the project's own files.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::git::GitState;
use crate::output::BatchResult;
use crate::project_config::{self, ProjectConfig};
use crate::templates::{StarterTemplate, TemplateSet};
use crate::utils::{io, validation};
use crate::{files, paths};

/// Sample content shipped with the toolkit, removed from new projects.
pub const EXAMPLE_CONTENT: &[&str] = &[
    "src/_includes/app/components/_example_page_list.njk",
    "src/example-pages",
    "src/pages-dexemple",
    "src/index.njk",
];

pub const DEFAULT_PROJECT_NAME: &str = "new-jam-on-project";
pub const DEFAULT_DESCRIPTION: &str = "New Ontario.ca Jamstack Toolkit project";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareResult {
    pub git_state: GitState,
    pub removed_git: bool,
    pub removed: Vec<String>,
}

/// Remove the toolkit's own history and example content.
///
/// A dirty checkout is refused unless `keep_git` is set, before anything is
/// removed.
pub fn prepare(project_root: &Path, keep_git: bool, state: GitState) -> Result<PrepareResult> {
    if state == GitState::Dirty && !keep_git {
        return Err(Error::project_git_dirty(project_root.display().to_string()));
    }

    let mut removed_git = false;
    if state == GitState::Clean && !keep_git {
        removed_git = files::remove_path(&paths::git_dir(project_root))?;
        if removed_git {
            log_status!("new", "Removed .git directory");
        }
    }

    let mut removed = Vec::new();
    for rel in EXAMPLE_CONTENT {
        if files::remove_path(&project_root.join(rel))? {
            log_status!("new", "Removed {}", rel);
            removed.push(rel.to_string());
        }
    }

    Ok(PrepareResult {
        git_state: state,
        removed_git,
        removed,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldAnswers {
    pub english_root: String,
    pub french_root: String,
    pub project_name: String,
    pub project_description: String,
}

impl ScaffoldAnswers {
    pub fn validate(&self) -> Result<()> {
        language_root(&self.english_root, "englishRoot")?;
        language_root(&self.french_root, "frenchRoot")?;
        if self.english_root.trim() == self.french_root.trim() {
            return Err(Error::validation_invalid_argument(
                "frenchRoot",
                "English and French roots must differ",
                Some(self.french_root.clone()),
                None,
            ));
        }
        validation::require_package_name(&self.project_name)?;
        Ok(())
    }
}

/// Problem with a language root directory name, if any.
pub fn language_root_problem(root: &str) -> Option<&'static str> {
    let root = root.trim();
    if root.is_empty() {
        return Some("root directory name cannot be empty");
    }
    if root == "." || root == ".." {
        return Some("root directory name cannot be '.' or '..'");
    }
    if root.contains(['/', '\\']) {
        return Some("root directory name cannot contain path separators");
    }
    None
}

fn language_root(root: &str, field: &str) -> Result<()> {
    match language_root_problem(root) {
        Some(problem) => Err(Error::validation_invalid_argument(
            field,
            problem,
            Some(root.to_string()),
            None,
        )),
        None => Ok(()),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldResult {
    pub config_path: String,
    pub config: ProjectConfig,
    pub starters: BatchResult,
}

impl ScaffoldResult {
    /// Fail with `project.scaffold_incomplete` when any starter was not written.
    /// The error details carry this whole report.
    pub fn require_complete(self) -> Result<Self> {
        if !self.starters.has_failures() {
            return Ok(self);
        }

        let failed = self.starters.failed_ids();
        let report = serde_json::to_value(&self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize scaffold report".to_string()))
        })?;
        Err(Error::project_scaffold_incomplete(failed, report))
    }
}

/// Persist the project config, then render every starter file.
///
/// A config write failure aborts. Starter files are written independently;
/// each outcome lands in `starters`.
pub fn create_project(
    project_root: &Path,
    answers: &ScaffoldAnswers,
    templates: &TemplateSet,
    created: DateTime<Utc>,
) -> Result<ScaffoldResult> {
    answers.validate()?;

    let config = ProjectConfig::new(
        answers.english_root.trim(),
        answers.french_root.trim(),
        answers.project_name.as_str(),
        answers.project_description.as_str(),
        created,
    );

    project_config::save(project_root, &config)?;
    log_status!("new", "Wrote {}", paths::PROJECT_CONFIG);

    let mut starters = BatchResult::new();
    for starter in StarterTemplate::ALL {
        let rel = starter.output_path(&config);
        let id = starter.id().to_string();

        match write_starter(project_root, starter, &rel, templates, &config) {
            Ok(()) => {
                log_status!("new", "Wrote {} {}", starter.description(), rel.display());
                starters.record_written(id, rel.display().to_string());
            }
            Err(err) => {
                let reason = err
                    .details
                    .get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
                    .unwrap_or(err.message);
                eprintln!(
                    "Error writing {} {}: {}",
                    starter.description(),
                    rel.display(),
                    reason
                );
                starters.record_error(id, rel.display().to_string(), reason);
            }
        }
    }

    Ok(ScaffoldResult {
        config_path: paths::PROJECT_CONFIG.to_string(),
        config,
        starters,
    })
}

fn write_starter(
    project_root: &Path,
    starter: StarterTemplate,
    rel: &Path,
    templates: &TemplateSet,
    config: &ProjectConfig,
) -> Result<()> {
    let content = templates.render(starter, config)?;
    let path = project_root.join(rel);
    io::write_file(&path, &content, &format!("write {}", path.display()))
}
