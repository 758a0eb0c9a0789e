use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use jam_on::locale::{self, LocaleTable, LocaleValue, MissingLocalePolicy};
use jam_on::{defaults, front_matter};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct LocaleArgs {
    /// Dotted key (e.g. nav.home or footer.links.0)
    pub key: String,

    /// Language tag
    #[arg(long, conflicts_with = "page")]
    pub lang: Option<String>,

    /// Page whose front matter `lang` selects the language
    #[arg(long, value_name = "PATH")]
    pub page: Option<PathBuf>,

    /// Text returned instead of failing when the key or language is missing
    #[arg(long)]
    pub fallback: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocaleOutput {
    command: &'static str,
    key: String,
    lang: String,
    value: LocaleValue,
}

pub fn run(args: LocaleArgs, global: &GlobalArgs) -> CmdResult<LocaleOutput> {
    let root = global.project_root()?;
    let defaults = defaults::load_defaults(root)?;
    let table = LocaleTable::load(root, &defaults)?;

    let lang = match (&args.lang, &args.page) {
        (Some(lang), _) => lang.clone(),
        (None, Some(page)) => front_matter::page_lang(&root.join(page))?,
        (None, None) => locale::DEFAULT_LANG.to_string(),
    };

    let policy = match args.fallback {
        Some(text) => MissingLocalePolicy::Fallback { text },
        None => defaults.locale.missing.clone(),
    };

    let value = table.resolve_with(&args.key, &lang, &policy)?;
    Ok((
        LocaleOutput {
            command: "locale",
            key: args.key,
            lang,
            value,
        },
        0,
    ))
}
