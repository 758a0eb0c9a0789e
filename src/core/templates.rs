//! Starter-file templates rendered by `new`.
//!
//! A project may ship its own copies under the configured templates directory;
//! otherwise the copies built into the binary are used.
//!
//! Rendering only substitutes `{{ key }}` placeholders naming one of the
//! project variables (`assetsDestination`, `englishRoot`, `frenchRoot`,
//! `projectName`, `projectDescription`, `createDate`). Everything else,
//! including filters such as `{{ projectName | safe }}` and `{% %}` tags, is
//! copied through unchanged for the site build to process.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::project_config::ProjectConfig;
use crate::utils::{io, template};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarterTemplate {
    English,
    French,
    Redirect,
    Test,
    Package,
}

impl StarterTemplate {
    pub const ALL: [StarterTemplate; 5] = [
        StarterTemplate::English,
        StarterTemplate::French,
        StarterTemplate::Redirect,
        StarterTemplate::Test,
        StarterTemplate::Package,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StarterTemplate::English => "english",
            StarterTemplate::French => "french",
            StarterTemplate::Redirect => "redirect",
            StarterTemplate::Test => "test",
            StarterTemplate::Package => "package",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            StarterTemplate::English => "en.njk",
            StarterTemplate::French => "fr.njk",
            StarterTemplate::Redirect => "redirect.njk",
            StarterTemplate::Test => "test.njk",
            StarterTemplate::Package => "package.njk",
        }
    }

    /// Project-relative path the rendered template is written to.
    pub fn output_path(&self, config: &ProjectConfig) -> PathBuf {
        match self {
            StarterTemplate::English => PathBuf::from(format!("src/{}.njk", config.english_root)),
            StarterTemplate::French => PathBuf::from(format!("src/{}.njk", config.french_root)),
            StarterTemplate::Redirect => PathBuf::from("src/index.njk"),
            StarterTemplate::Test => PathBuf::from("test/test.js"),
            StarterTemplate::Package => PathBuf::from("package.json"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StarterTemplate::English => "English-side starter file",
            StarterTemplate::French => "French-side starter file",
            StarterTemplate::Redirect => "root-level redirect file",
            StarterTemplate::Test => "starter test file",
            StarterTemplate::Package => "NPM package.json file",
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            StarterTemplate::English => include_str!("../../templates/en.njk"),
            StarterTemplate::French => include_str!("../../templates/fr.njk"),
            StarterTemplate::Redirect => include_str!("../../templates/redirect.njk"),
            StarterTemplate::Test => include_str!("../../templates/test.njk"),
            StarterTemplate::Package => include_str!("../../templates/package.njk"),
        }
    }
}

/// Where template sources come from.
pub struct TemplateSet {
    dir: Option<PathBuf>,
}

impl TemplateSet {
    /// Prefer templates in `dir`, falling back to the built-in copies per file.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn builtin() -> Self {
        Self { dir: None }
    }

    pub fn source(&self, starter: StarterTemplate) -> Result<String> {
        if let Some(path) = self.project_path(starter) {
            return io::read_file(&path, &format!("read template {}", path.display()));
        }
        Ok(starter.builtin().to_string())
    }

    pub fn render(&self, starter: StarterTemplate, config: &ProjectConfig) -> Result<String> {
        let source = self.source(starter)?;
        Ok(template::render(&source, &config.template_vars()))
    }

    fn project_path(&self, starter: StarterTemplate) -> Option<PathBuf> {
        let path = self.dir.as_deref().map(|d| d.join(starter.file_name()))?;
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> ProjectConfig {
        ProjectConfig::new("en-ca", "fr-ca", "sample-proj", "desc", Utc::now())
    }

    #[test]
    fn output_paths_follow_language_roots() {
        let config = config();
        assert_eq!(
            StarterTemplate::English.output_path(&config),
            PathBuf::from("src/en-ca.njk")
        );
        assert_eq!(
            StarterTemplate::French.output_path(&config),
            PathBuf::from("src/fr-ca.njk")
        );
        assert_eq!(
            StarterTemplate::Package.output_path(&config),
            PathBuf::from("package.json")
        );
    }

    #[test]
    fn builtin_pages_carry_name_and_description() {
        let set = TemplateSet::builtin();
        for template in [
            StarterTemplate::English,
            StarterTemplate::French,
            StarterTemplate::Redirect,
        ] {
            let out = set.render(template, &config()).unwrap();
            assert!(out.contains("sample-proj"), "{:?}", template);
            assert!(out.contains("desc"), "{:?}", template);
        }
    }

    #[test]
    fn builtin_pages_keep_site_filters() {
        let out = TemplateSet::builtin()
            .render(StarterTemplate::English, &config())
            .unwrap();
        assert!(out.contains(r#"{{ "starterPage.intro" | localeString }}"#));
        assert!(out.contains("permalink: /en-ca/index.html"));
    }

    #[test]
    fn builtin_package_is_valid_json() {
        let out = TemplateSet::builtin()
            .render(StarterTemplate::Package, &config())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["name"], "sample-proj");
        assert_eq!(json["description"], "desc");
    }

    #[test]
    fn project_templates_take_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.njk"), "custom {{ projectName }}").unwrap();
        let set = TemplateSet::from_dir(dir.path());

        assert_eq!(
            set.render(StarterTemplate::English, &config()).unwrap(),
            "custom sample-proj"
        );
        // fr.njk is not in the project, so the built-in copy is used
        assert!(set
            .render(StarterTemplate::French, &config())
            .unwrap()
            .contains("lang: fr"));
    }

    #[test]
    fn project_templates_only_substitute_plain_placeholders() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("en.njk"),
            "{% if draft %}{{ projectName | safe }}{% endif %} {{ projectName }}",
        )
        .unwrap();

        let out = TemplateSet::from_dir(dir.path())
            .render(StarterTemplate::English, &config())
            .unwrap();

        assert_eq!(
            out,
            "{% if draft %}{{ projectName | safe }}{% endif %} sample-proj"
        );
    }
}
