use clap::Args;

use jam_on::prompt::PromptEngine;
use jam_on::update::{self, UpdateResult};
use jam_on::defaults;

use crate::commands::{confirm, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct UpdateArgs {
    /// Toolkit tag or branch to update to
    #[arg(value_name = "TAG_OR_BRANCH")]
    pub reference: String,

    /// Repository to clone: URL, local path, or a configured name (github|gitlab)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Proceed without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: UpdateArgs, global: &GlobalArgs) -> CmdResult<UpdateResult> {
    let root = global.project_root()?;
    let defaults = defaults::load_defaults(root)?;
    let repo = defaults.resolve_repo(args.repo.as_deref());

    let question = format!(
        "This will overwrite the toolkit core files with '{}' from {}. Proceed?",
        args.reference, repo
    );
    if !confirm(&PromptEngine::new(), args.yes, &question)? {
        return Ok((UpdateResult::aborted(&args.reference, &repo), 0));
    }

    let result = update::run(root, &args.reference, &repo)?;
    Ok((result, 0))
}
