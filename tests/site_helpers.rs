use jam_on::front_matter;
use jam_on::{LocaleValue, MissingLocalePolicy, SiteHelpers};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/_data/core/core-locale-strings.json",
        r#"{
            "siteTitle": {"en": "Ontario.ca", "fr": "Ontario.ca (fr)"},
            "footer": {"links": [{"en": "Privacy", "fr": "Confidentialité"}]},
            "months": [{"en": "January", "fr": "janvier"}, {"en": "February", "fr": "février"}]
        }"#,
    );
    write(
        dir.path(),
        "src/_data/app/app-locale-strings.json",
        r#"{"siteTitle": {"en": "My app", "fr": "Mon appli"}}"#,
    );
    write(
        dir.path(),
        "src/fr-ca.njk",
        "---\nlang: fr\ntitle: Accueil\n---\n<h1>{{ title }}</h1>\n",
    );
    dir
}

#[test]
fn app_strings_override_global_strings() {
    let dir = project();
    let site = SiteHelpers::load(dir.path()).unwrap();

    assert_eq!(
        site.locale_string("siteTitle", "fr").unwrap(),
        LocaleValue::Text("Mon appli".to_string())
    );
}

#[test]
fn page_language_drives_lookup() {
    let dir = project();
    let site = SiteHelpers::load(dir.path()).unwrap();
    let lang = front_matter::page_lang(&dir.path().join("src/fr-ca.njk")).unwrap();

    assert_eq!(
        site.locale_string("footer.links.0", &lang).unwrap().to_string(),
        "Confidentialité"
    );
    assert_eq!(
        site.locale_string("months", &lang).unwrap().to_string(),
        "janvier,février"
    );
}

#[test]
fn missing_key_fails_by_default() {
    let dir = project();
    let site = SiteHelpers::load(dir.path()).unwrap();

    let err = site.locale_string("nav.home", "en").unwrap_err();
    assert_eq!(err.code.as_str(), "locale.key_not_found");
}

#[test]
fn configured_fallback_replaces_missing_strings() {
    let dir = project();
    write(
        dir.path(),
        ".jam-on/app/jam-on.json",
        r#"{"defaults": {"locale": {"missing": {"mode": "fallback", "text": "??"}}}}"#,
    );
    let site = SiteHelpers::load(dir.path()).unwrap();

    assert_eq!(
        site.locale_string("nav.home", "en").unwrap(),
        LocaleValue::Text("??".to_string())
    );
    assert_eq!(
        site.locale_string("siteTitle", "de").unwrap(),
        LocaleValue::Text("??".to_string())
    );
}

#[test]
fn explicit_policy_is_honoured() {
    let dir = project();
    let site = SiteHelpers::load(dir.path()).unwrap();
    let table = site.locale();

    let value = table
        .resolve_with(
            "nav.home",
            "en",
            &MissingLocalePolicy::Fallback {
                text: String::new(),
            },
        )
        .unwrap();
    assert_eq!(value, LocaleValue::Text(String::new()));
}

#[test]
fn markdown_and_year_helpers() {
    let dir = project();
    let site = SiteHelpers::load(dir.path()).unwrap();

    assert_eq!(site.markdown("Some *emphasis*"), "Some <em>emphasis</em>");
    assert_eq!(site.current_year().len(), 4);
    assert!(site.current_year().ends_with(&site.current_short_year()));
}
