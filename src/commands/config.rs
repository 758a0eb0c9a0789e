use clap::Args;
use serde::Serialize;

use jam_on::defaults::{self, Defaults};
use jam_on::project_config::{self, ProjectConfig};
use jam_on::paths;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    /// Show the effective CLI defaults (built-ins merged with jam-on.json)
    #[arg(long)]
    defaults: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<ProjectConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
}

pub fn run(args: ConfigArgs, global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    let root = global.project_root()?;

    if args.defaults {
        return Ok((
            ConfigOutput {
                command: "config.defaults".to_string(),
                path: paths::cli_config(root).display().to_string(),
                config: None,
                defaults: Some(defaults::load_defaults(root)?),
            },
            0,
        ));
    }

    Ok((
        ConfigOutput {
            command: "config.show".to_string(),
            path: paths::project_config(root).display().to_string(),
            config: Some(project_config::load(root)?),
            defaults: None,
        },
        0,
    ))
}
