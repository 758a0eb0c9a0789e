use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigMissingFile,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    LocaleKeyNotFound,
    LocaleLanguageNotFound,

    ProjectGitDirty,
    ProjectScaffoldIncomplete,

    GitCommandFailed,

    UpdateMissingCorePath,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigMissingFile => "config.missing_file",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::LocaleKeyNotFound => "locale.key_not_found",
            ErrorCode::LocaleLanguageNotFound => "locale.language_not_found",

            ErrorCode::ProjectGitDirty => "project.git_dirty",
            ErrorCode::ProjectScaffoldIncomplete => "project.scaffold_incomplete",

            ErrorCode::GitCommandFailed => "git.command_failed",

            ErrorCode::UpdateMissingCorePath => "update.missing_core_path",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleLookupDetails {
    pub key: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let problem = problem.into();
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            format!("Invalid argument: {}", problem),
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem,
                value,
                tried,
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            to_details(ConfigInvalidJsonDetails {
                path: path.into(),
                error: error.into(),
            }),
        )
    }

    pub fn config_missing_file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ConfigMissingFile,
            format!("Configuration file not found: {}", path),
            serde_json::json!({ "path": path }),
        )
    }

    pub fn locale_key_not_found(key: &str, lang: &str, segment: &str) -> Self {
        Self::new(
            ErrorCode::LocaleKeyNotFound,
            format!("Locale key '{}' not found (missing '{}')", key, segment),
            to_details(LocaleLookupDetails {
                key: key.to_string(),
                lang: lang.to_string(),
                segment: Some(segment.to_string()),
            }),
        )
    }

    pub fn locale_language_not_found(key: &str, lang: &str) -> Self {
        Self::new(
            ErrorCode::LocaleLanguageNotFound,
            format!("Locale key '{}' has no '{}' string", key, lang),
            to_details(LocaleLookupDetails {
                key: key.to_string(),
                lang: lang.to_string(),
                segment: None,
            }),
        )
    }

    pub fn project_git_dirty(path: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ProjectGitDirty,
            "Local Git repo has modifications",
            serde_json::json!({ "path": path.into() }),
        )
        .with_hint("Commit or stash your changes, or rerun with --keepGit")
    }

    /// `report` is the serialized scaffold outcome; its fields are kept in
    /// `details` next to the list of failed starters.
    pub fn project_scaffold_incomplete(failed: Vec<String>, report: Value) -> Self {
        let mut details = match report {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        let message = format!("{} starter file(s) could not be written", failed.len());
        details.insert("failed".to_string(), serde_json::json!(failed));

        Self::new(
            ErrorCode::ProjectScaffoldIncomplete,
            message,
            Value::Object(details),
        )
    }

    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::GitCommandFailed,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn update_missing_core_path(reference: &str, missing: Vec<String>) -> Self {
        Self::new(
            ErrorCode::UpdateMissingCorePath,
            format!(
                "Toolkit ref '{}' is missing {} core path(s)",
                reference,
                missing.len()
            ),
            serde_json::json!({ "ref": reference, "missing": missing }),
        )
        .with_hint("Check that the tag or branch is a Jamstack Toolkit release")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalIoErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalJsonErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
