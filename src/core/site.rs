//! Template helpers the site build registers: the `markdown` and
//! `localeString` filters and the `currentYear` / `currentShortYear` shortcodes.

use chrono::Datelike;
use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};
use serde::Serialize;
use std::path::Path;

use crate::defaults::{self, Defaults};
use crate::error::Result;
use crate::locale::{LocaleTable, LocaleValue, MissingLocalePolicy};

pub const MARKDOWN_FILTER: &str = "markdown";
pub const LOCALE_STRING_FILTER: &str = "localeString";
pub const CURRENT_YEAR_SHORTCODE: &str = "currentYear";
pub const CURRENT_SHORT_YEAR_SHORTCODE: &str = "currentShortYear";

pub const FILTERS: &[&str] = &[MARKDOWN_FILTER, LOCALE_STRING_FILTER];
pub const SHORTCODES: &[&str] = &[CURRENT_YEAR_SHORTCODE, CURRENT_SHORT_YEAR_SHORTCODE];

/// Base configuration object handed to the site build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/".to_string(),
        }
    }
}

/// Render markdown without the wrapping paragraph, for use inside existing markup.
///
/// Raw HTML is passed through untouched.
pub fn markdown_inline(content: &str) -> String {
    let events = Parser::new(content).filter_map(|event| match event {
        Event::Start(Tag::Paragraph) => None,
        Event::End(TagEnd::Paragraph) => Some(Event::SoftBreak),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out.trim_end().to_string()
}

pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

pub fn current_short_year() -> String {
    short_year(chrono::Local::now().year())
}

/// Last two digits of the year as written (2025 -> "25").
pub fn short_year(year: i32) -> String {
    let full = year.to_string();
    let start = full.len().saturating_sub(2);
    full[start..].to_string()
}

/// Helpers bound to one project's locale strings.
pub struct SiteHelpers {
    locale: LocaleTable,
    policy: MissingLocalePolicy,
    config: SiteConfig,
}

impl SiteHelpers {
    pub fn new(locale: LocaleTable, policy: MissingLocalePolicy) -> Self {
        Self {
            locale,
            policy,
            config: SiteConfig::default(),
        }
    }

    /// Build helpers for the project at `project_root` using its configured defaults.
    pub fn load(project_root: &Path) -> Result<Self> {
        let defaults = defaults::load_defaults(project_root)?;
        Self::load_with(project_root, &defaults)
    }

    pub fn load_with(project_root: &Path, defaults: &Defaults) -> Result<Self> {
        let locale = LocaleTable::load(project_root, defaults)?;
        Ok(Self::new(locale, defaults.locale.missing.clone()))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn locale(&self) -> &LocaleTable {
        &self.locale
    }

    pub fn locale_string(&self, key: &str, lang: &str) -> Result<LocaleValue> {
        self.locale.resolve_with(key, lang, &self.policy)
    }

    pub fn markdown(&self, content: &str) -> String {
        markdown_inline(content)
    }

    pub fn current_year(&self) -> String {
        current_year()
    }

    pub fn current_short_year(&self) -> String {
        current_short_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn markdown_inline_drops_paragraph_wrapper() {
        assert_eq!(
            markdown_inline("Read the **guide** and [apply](/apply)."),
            r#"Read the <strong>guide</strong> and <a href="/apply">apply</a>."#
        );
    }

    #[test]
    fn markdown_inline_passes_html_through() {
        let out = markdown_inline("Call <abbr title=\"ServiceOntario\">SO</abbr> today");
        assert!(out.contains("<abbr title=\"ServiceOntario\">SO</abbr>"));
        assert!(!out.starts_with("<p>"));
    }

    #[test]
    fn short_year_keeps_last_two_digits() {
        assert_eq!(short_year(2025), "25");
        assert_eq!(short_year(2100), "00");
        assert_eq!(short_year(7), "7");
    }

    #[test]
    fn year_shortcodes_agree() {
        let full = current_year();
        let short = current_short_year();
        assert_eq!(full.len(), 4);
        assert!(full.ends_with(&short));
    }

    #[test]
    fn helpers_resolve_with_configured_policy() {
        let global = match json!({ "home": { "en": "Home", "fr": "Accueil" } }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let table = LocaleTable::merge(&global, &serde_json::Map::new());
        let helpers = SiteHelpers::new(
            table,
            MissingLocalePolicy::Fallback {
                text: "[missing]".to_string(),
            },
        );

        assert_eq!(helpers.locale_string("home", "fr").unwrap().to_string(), "Accueil");
        assert_eq!(
            helpers.locale_string("away", "fr").unwrap().to_string(),
            "[missing]"
        );
        assert_eq!(helpers.config().path_prefix, "/");
    }

    #[test]
    fn registered_names_match_template_usage() {
        assert!(FILTERS.contains(&"localeString"));
        assert!(SHORTCODES.contains(&"currentShortYear"));
    }
}
