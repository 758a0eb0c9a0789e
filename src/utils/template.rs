//! String template rendering utilities.
//!
//! Placeholders are `{{key}}` or `{{ key }}`. Placeholders whose key has no
//! value are left untouched so downstream template engines still see them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub struct TemplateVars;

impl TemplateVars {
    pub const ASSETS_DESTINATION: &'static str = "assetsDestination";
    pub const ENGLISH_ROOT: &'static str = "englishRoot";
    pub const FRENCH_ROOT: &'static str = "frenchRoot";
    pub const PROJECT_NAME: &'static str = "projectName";
    pub const PROJECT_DESCRIPTION: &'static str = "projectDescription";
    pub const CREATE_DATE: &'static str = "createDate";
}

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            variables
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
