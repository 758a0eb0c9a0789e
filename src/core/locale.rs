//! Locale-string lookup for bilingual pages.
//!
//! A [`LocaleTable`] is the shallow merge of the toolkit's global dictionary and
//! the project's app dictionary. It is built once and only read afterwards.
//! Keys are dotted paths (`nav.home`); the leaf is either a `{lang: string}`
//! record or a list of such records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::utils::io;

pub type LocaleDictionary = Map<String, Value>;

pub const DEFAULT_LANG: &str = "en";

/// What a lookup returns when a key or language is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MissingLocalePolicy {
    #[default]
    Fail,
    Fallback { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleValue {
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for LocaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleValue::Text(text) => write!(f, "{}", text),
            LocaleValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    entries: LocaleDictionary,
}

impl LocaleTable {
    /// Merge two dictionaries; app entries replace global entries with the same top-level key.
    pub fn merge(global: &LocaleDictionary, app: &LocaleDictionary) -> Self {
        let mut entries = global.clone();
        for (key, value) in app {
            entries.insert(key.clone(), value.clone());
        }
        Self { entries }
    }

    /// Load and merge the project's global and app dictionaries.
    ///
    /// The global dictionary is required; a missing app dictionary counts as empty.
    pub fn load(project_root: &Path, defaults: &Defaults) -> Result<Self> {
        let global_path = defaults.global_strings_path(project_root);
        if !global_path.exists() {
            return Err(Error::config_missing_file(global_path.display().to_string())
                .with_hint("Run this command from the root of a Jamstack Toolkit project"));
        }
        let global = read_dictionary(&global_path)?;

        let app_path = defaults.app_strings_path(project_root);
        let app = if app_path.exists() {
            read_dictionary(&app_path)?
        } else {
            LocaleDictionary::new()
        };

        Ok(Self::merge(&global, &app))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Resolve `key` for `lang`, failing on any missing key or language.
    pub fn resolve(&self, key: &str, lang: &str) -> Result<LocaleValue> {
        self.resolve_with(key, lang, &MissingLocalePolicy::Fail)
    }

    pub fn resolve_with(
        &self,
        key: &str,
        lang: &str,
        policy: &MissingLocalePolicy,
    ) -> Result<LocaleValue> {
        let node = match self.lookup(key) {
            Ok(node) => node,
            Err(segment) => {
                return match policy {
                    MissingLocalePolicy::Fail => {
                        Err(Error::locale_key_not_found(key, lang, segment))
                    }
                    MissingLocalePolicy::Fallback { text } => Ok(LocaleValue::Text(text.clone())),
                };
            }
        };

        match node {
            Value::Array(records) => records
                .iter()
                .map(|record| translate(record, key, lang, policy))
                .collect::<Result<Vec<_>>>()
                .map(LocaleValue::List),
            record => translate(record, key, lang, policy).map(LocaleValue::Text),
        }
    }

    /// Walk the dotted path; on failure return the segment that was missing.
    fn lookup<'k>(&self, key: &'k str) -> std::result::Result<&Value, &'k str> {
        let mut segments = key.split('.');
        let first = segments.next().unwrap_or(key);
        let mut node = self.entries.get(first).ok_or(first)?;

        for segment in segments {
            node = match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            }
            .ok_or(segment)?;
        }

        Ok(node)
    }
}

/// Pick the `lang` string out of a single per-language record.
fn translate(
    record: &Value,
    key: &str,
    lang: &str,
    policy: &MissingLocalePolicy,
) -> Result<String> {
    match record.get(lang) {
        Some(value) => Ok(stringify(value)),
        None => match policy {
            MissingLocalePolicy::Fail => Err(Error::locale_language_not_found(key, lang)),
            MissingLocalePolicy::Fallback { text } => Ok(text.clone()),
        },
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a locale dictionary; the JSON root must be an object.
pub fn parse_dictionary(content: &str, source: &str) -> Result<LocaleDictionary> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::config_invalid_json(
            source,
            "locale strings must be a JSON object",
        )),
        Err(e) => Err(Error::config_invalid_json(source, e.to_string())),
    }
}

fn read_dictionary(path: &Path) -> Result<LocaleDictionary> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    parse_dictionary(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(value: Value) -> LocaleDictionary {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn sample_table() -> LocaleTable {
        let global = dict(json!({
            "siteTitle": { "en": "Ontario.ca", "fr": "Ontario.ca (fr)" },
            "nav": {
                "home": { "en": "Home", "fr": "Accueil" },
                "contact": { "en": "Contact us", "fr": "Contactez-nous" }
            },
            "footerLinks": [
                { "en": "Accessibility", "fr": "Accessibilité" },
                { "en": "Privacy", "fr": "Confidentialité" },
                { "en": "Terms of use", "fr": "Conditions d'utilisation" }
            ],
            "year": { "en": 2024, "fr": 2024 }
        }));
        let app = dict(json!({
            "siteTitle": { "en": "My App", "fr": "Mon app" },
            "appOnly": { "en": "Only here", "fr": "Seulement ici" }
        }));
        LocaleTable::merge(&global, &app)
    }

    #[test]
    fn resolves_top_level_key() {
        let table = sample_table();
        assert_eq!(
            table.resolve("appOnly", "fr").unwrap(),
            LocaleValue::Text("Seulement ici".to_string())
        );
    }

    #[test]
    fn resolves_dotted_key_for_each_language() {
        let table = sample_table();
        assert_eq!(table.resolve("nav.home", "en").unwrap().to_string(), "Home");
        assert_eq!(table.resolve("nav.home", "fr").unwrap().to_string(), "Accueil");
        assert_eq!(
            table.resolve("nav.contact", "fr").unwrap().to_string(),
            "Contactez-nous"
        );
    }

    #[test]
    fn list_values_map_every_record() {
        let table = sample_table();
        let value = table.resolve("footerLinks", "fr").unwrap();
        assert_eq!(
            value,
            LocaleValue::List(vec![
                "Accessibilité".to_string(),
                "Confidentialité".to_string(),
                "Conditions d'utilisation".to_string(),
            ])
        );
    }

    #[test]
    fn list_elements_can_be_indexed() {
        let table = sample_table();
        assert_eq!(
            table.resolve("footerLinks.1", "en").unwrap().to_string(),
            "Privacy"
        );
    }

    #[test]
    fn non_string_values_are_stringified() {
        let table = sample_table();
        assert_eq!(table.resolve("year", "en").unwrap().to_string(), "2024");
    }

    #[test]
    fn app_entries_replace_global_entries_wholesale() {
        let global = dict(json!({
            "shared": { "en": "Global", "fr": "Global (fr)", "es": "Global (es)" },
            "globalOnly": { "en": "G" }
        }));
        let app = dict(json!({
            "shared": { "en": "App" },
            "appOnly": { "en": "A" }
        }));

        let table = LocaleTable::merge(&global, &app);

        assert_eq!(table.len(), 3);
        assert!(table.contains_key("globalOnly"));
        assert!(table.contains_key("appOnly"));
        assert_eq!(table.get("shared"), Some(&json!({ "en": "App" })));
        assert!(table.resolve("shared", "es").is_err());
    }

    #[test]
    fn merge_leaves_sources_untouched() {
        let global = dict(json!({ "a": { "en": "1" } }));
        let app = dict(json!({ "a": { "en": "2" } }));
        let before = (global.clone(), app.clone());

        let _ = LocaleTable::merge(&global, &app);

        assert_eq!((global, app), before);
    }

    #[test]
    fn missing_key_fails_with_segment() {
        let table = sample_table();
        let err = table.resolve("nav.missing", "en").unwrap_err();
        assert_eq!(err.code.as_str(), "locale.key_not_found");
        assert_eq!(err.details["segment"], "missing");
        assert_eq!(err.details["key"], "nav.missing");
    }

    #[test]
    fn missing_language_fails() {
        let table = sample_table();
        let err = table.resolve("nav.home", "es").unwrap_err();
        assert_eq!(err.code.as_str(), "locale.language_not_found");
    }

    #[test]
    fn descending_through_a_string_fails() {
        let table = sample_table();
        let err = table.resolve("nav.home.en.extra", "en").unwrap_err();
        assert_eq!(err.details["segment"], "extra");
    }

    #[test]
    fn fallback_policy_substitutes_missing_values() {
        let table = sample_table();
        let policy = MissingLocalePolicy::Fallback {
            text: "undefined".to_string(),
        };

        assert_eq!(
            table.resolve_with("nope", "en", &policy).unwrap().to_string(),
            "undefined"
        );
        assert_eq!(
            table.resolve_with("footerLinks", "es", &policy).unwrap(),
            LocaleValue::List(vec!["undefined".to_string(); 3])
        );
    }

    #[test]
    fn parse_dictionary_rejects_non_objects() {
        let err = parse_dictionary("[1, 2]", "strings.json").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
        assert!(parse_dictionary("{\"a\": {}}", "strings.json").is_ok());
    }

    #[test]
    fn policy_deserializes_from_config() {
        let policy: MissingLocalePolicy = serde_json::from_str(r#"{"mode": "fail"}"#).unwrap();
        assert_eq!(policy, MissingLocalePolicy::Fail);
    }
}
