use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::paths;
use crate::utils::io;
use crate::utils::template::TemplateVars;

/// Settings chosen when a project is created, persisted to `.jam-on/app/conf.json`
/// and read back by the site templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub assets_destination: String,
    pub english_root: String,
    pub french_root: String,
    pub project_name: String,
    pub project_description: String,
    pub create_date: String,
}

impl ProjectConfig {
    pub fn new(
        english_root: impl Into<String>,
        french_root: impl Into<String>,
        project_name: impl Into<String>,
        project_description: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        let english_root = english_root.into();
        Self {
            assets_destination: format!("{}/assets", english_root),
            english_root,
            french_root: french_root.into(),
            project_name: project_name.into(),
            project_description: project_description.into(),
            create_date: created.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Template variables keyed the same way as the JSON fields.
    pub fn template_vars(&self) -> Vec<(&'static str, &str)> {
        vec![
            (TemplateVars::ASSETS_DESTINATION, self.assets_destination.as_str()),
            (TemplateVars::ENGLISH_ROOT, self.english_root.as_str()),
            (TemplateVars::FRENCH_ROOT, self.french_root.as_str()),
            (TemplateVars::PROJECT_NAME, self.project_name.as_str()),
            (TemplateVars::PROJECT_DESCRIPTION, self.project_description.as_str()),
            (TemplateVars::CREATE_DATE, self.create_date.as_str()),
        ]
    }
}

/// Persist the config in one atomic write.
pub fn save(project_root: &Path, config: &ProjectConfig) -> Result<()> {
    let path = paths::project_config(project_root);
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize conf.json".to_string())))?;

    io::write_file_atomic(&path, &content, &format!("write {}", path.display()))
}

pub fn load(project_root: &Path) -> Result<ProjectConfig> {
    let path = paths::project_config(project_root);
    if !path.exists() {
        return Err(Error::config_missing_file(path.display().to_string())
            .with_hint("Run 'jam-on new' to create the project config"));
    }

    let content = io::read_file(&path, &format!("read {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample() -> ProjectConfig {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        ProjectConfig::new("en-ca", "fr-ca", "sample-proj", "desc", created)
    }

    #[test]
    fn assets_destination_derives_from_english_root() {
        assert_eq!(sample().assets_destination, "en-ca/assets");
    }

    #[test]
    fn create_date_is_iso_with_millis() {
        assert_eq!(sample().create_date, "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["assetsDestination"], "en-ca/assets");
        assert_eq!(json["englishRoot"], "en-ca");
        assert_eq!(json["frenchRoot"], "fr-ca");
        assert_eq!(json["projectName"], "sample-proj");
        assert_eq!(json["projectDescription"], "desc");
        assert_eq!(json["createDate"], "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn save_then_load_returns_same_config() {
        let dir = TempDir::new().unwrap();
        save(dir.path(), &sample()).unwrap();
        assert_eq!(load(dir.path()).unwrap(), sample());
    }

    #[test]
    fn load_without_config_is_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "config.missing_file");
    }
}
