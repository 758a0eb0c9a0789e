use chrono::Utc;
use clap::Args;
use serde::Serialize;

use jam_on::git::{self, GitState};
use jam_on::prompt::{PromptEngine, TextPrompt};
use jam_on::scaffold::{self, PrepareResult, ScaffoldAnswers, ScaffoldResult};
use jam_on::templates::TemplateSet;
use jam_on::utils::validation;
use jam_on::{defaults, Error};

use crate::commands::{confirm, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct NewArgs {
    /// Keep the toolkit's .git directory
    #[arg(long = "keepGit")]
    pub keep_git: bool,

    /// Proceed without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// English root directory (e.g. en-ca)
    #[arg(long = "en-root", value_name = "DIR")]
    pub en_root: Option<String>,

    /// French root directory (e.g. fr-ca)
    #[arg(long = "fr-root", value_name = "DIR")]
    pub fr_root: Option<String>,

    /// NPM package name
    #[arg(long)]
    pub name: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutput {
    command: &'static str,
    git_state: GitState,
    aborted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    prepared: Option<PrepareResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<ScaffoldResult>,
}

pub fn run(args: NewArgs, global: &GlobalArgs) -> CmdResult<NewOutput> {
    let root = global.project_root()?;

    // Settle the git state before asking anything.
    let git_state = git::detect_state(root)?;
    if git_state == GitState::Dirty && !args.keep_git {
        return Err(Error::project_git_dirty(root.display().to_string()));
    }

    let prompts = PromptEngine::new();
    let question = if args.keep_git {
        "This will remove the example content and create a new project. Proceed?"
    } else {
        "This will remove the example content and the toolkit's .git directory, then create a new project. Proceed?"
    };
    if !confirm(&prompts, args.yes, question)? {
        return Ok((
            NewOutput {
                command: "new",
                git_state,
                aborted: true,
                prepared: None,
                project: None,
            },
            0,
        ));
    }

    let defaults = defaults::load_defaults(root)?;
    let answers = collect_answers(&args, &prompts)?;

    let prepared = scaffold::prepare(root, args.keep_git, git_state)?;
    let templates = TemplateSet::from_dir(defaults.templates_path(root));
    let project =
        scaffold::create_project(root, &answers, &templates, Utc::now())?.require_complete()?;

    Ok((
        NewOutput {
            command: "new",
            git_state,
            aborted: false,
            prepared: Some(prepared),
            project: Some(project),
        },
        0,
    ))
}

/// Flags first, then prompts; roots have no default.
fn collect_answers(args: &NewArgs, prompts: &PromptEngine) -> jam_on::Result<ScaffoldAnswers> {
    let english_root = answer(
        args.en_root.clone(),
        prompts,
        TextPrompt::new("English root directory (e.g. en-ca)")
            .with_validator(scaffold::language_root_problem),
        "en-root",
    )?;
    let french_root = answer(
        args.fr_root.clone(),
        prompts,
        TextPrompt::new("French root directory (e.g. fr-ca)")
            .with_validator(scaffold::language_root_problem),
        "fr-root",
    )?;
    let project_name = answer(
        args.name.clone(),
        prompts,
        TextPrompt::new("NPM package name")
            .with_default(scaffold::DEFAULT_PROJECT_NAME)
            .with_validator(validation::package_name_problem),
        "name",
    )?;
    let project_description = answer(
        args.description.clone(),
        prompts,
        TextPrompt::new("Project description").with_default(scaffold::DEFAULT_DESCRIPTION),
        "description",
    )?;

    let answers = ScaffoldAnswers {
        english_root,
        french_root,
        project_name,
        project_description,
    };
    answers.validate()?;
    Ok(answers)
}

fn answer(
    flag: Option<String>,
    prompts: &PromptEngine,
    prompt: TextPrompt,
    field: &str,
) -> jam_on::Result<String> {
    flag.or_else(|| prompts.text(&prompt))
        .ok_or_else(|| Error::validation_missing_argument(vec![format!("--{}", field)]))
}
