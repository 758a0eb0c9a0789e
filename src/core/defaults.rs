use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::locale::MissingLocalePolicy;
use crate::paths;
use crate::utils::io;

/// Root structure of the optional per-project `.jam-on/app/jam-on.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JamOnConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via jam-on.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_repo")]
    pub default_repo: String,

    #[serde(default = "default_repos")]
    pub repos: BTreeMap<String, String>,

    #[serde(default = "default_locale")]
    pub locale: LocaleConfig,

    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            default_repo: default_repo(),
            repos: default_repos(),
            locale: default_locale(),
            templates_dir: default_templates_dir(),
        }
    }
}

/// Where the locale dictionaries live and how missing strings are handled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    #[serde(default = "default_global_strings")]
    pub global_strings: String,

    #[serde(default = "default_app_strings")]
    pub app_strings: String,

    #[serde(default)]
    pub missing: MissingLocalePolicy,
}

// =============================================================================
// Default value functions
// =============================================================================

const GITHUB_REPO: &str = "https://github.com/ongov/Ontario.ca-Jamstack-Application-Toolkit";
const GITLAB_REPO: &str = "https://git.ontariogovernment.ca/service-integration/application-development-toolkit/jamstack-application-toolkit";

fn default_repo() -> String {
    "github".to_string()
}

fn default_repos() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("github".to_string(), GITHUB_REPO.to_string()),
        ("gitlab".to_string(), GITLAB_REPO.to_string()),
    ])
}

fn default_locale() -> LocaleConfig {
    LocaleConfig {
        global_strings: default_global_strings(),
        app_strings: default_app_strings(),
        missing: MissingLocalePolicy::default(),
    }
}

fn default_global_strings() -> String {
    "src/_data/core/core-locale-strings.json".to_string()
}

fn default_app_strings() -> String {
    "src/_data/app/app-locale-strings.json".to_string()
}

fn default_templates_dir() -> String {
    ".jam-on/core/templates".to_string()
}

impl Defaults {
    /// Resolve a `--repo` value: a named repo, a `~`-prefixed path, or a URL as given.
    ///
    /// With no value the configured default is used.
    pub fn resolve_repo(&self, requested: Option<&str>) -> String {
        let requested = requested.unwrap_or(&self.default_repo);
        if let Some(url) = self.repos.get(requested) {
            return url.clone();
        }
        if requested.starts_with('~') {
            return shellexpand::tilde(requested).into_owned();
        }
        requested.to_string()
    }

    pub fn global_strings_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.locale.global_strings)
    }

    pub fn app_strings_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.locale.app_strings)
    }

    pub fn templates_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.templates_dir)
    }
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults for a project, merging its jam-on.json (if any) with built-ins.
pub fn load_defaults(project_root: &Path) -> Result<Defaults> {
    Ok(load_config(project_root)?.defaults)
}

/// Load the full jam-on.json config. A missing file yields built-in defaults;
/// an unreadable or malformed file is an error.
pub fn load_config(project_root: &Path) -> Result<JamOnConfig> {
    let path = paths::cli_config(project_root);

    if !path.exists() {
        return Ok(JamOnConfig::default());
    }

    let content = io::read_file(&path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e.to_string()))
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
