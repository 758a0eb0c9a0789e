//! Page front matter: the YAML block between `---` fences at the top of a page.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::locale::DEFAULT_LANG;
use crate::utils::io;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl FrontMatter {
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

/// Split `content` into its raw front matter block (if any) and the body.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }

    (None, content)
}

pub fn parse(content: &str, source: &str) -> Result<FrontMatter> {
    let Some(block) = split(content).0 else {
        return Ok(FrontMatter::default());
    };
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yml::from_str(block).map_err(|e| {
        Error::validation_invalid_argument(
            "frontMatter",
            format!("Invalid front matter in {}: {}", source, e),
            None,
            None,
        )
    })
}

/// Read a page once and return its language tag (`en` when unset).
pub fn page_lang(path: &Path) -> Result<String> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    let front_matter = parse(&content, &path.display().to_string())?;
    Ok(front_matter.lang().to_string())
}
