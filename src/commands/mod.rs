use std::path::{Path, PathBuf};

use jam_on::prompt::{PromptEngine, YesNoPrompt};
use jam_on::Error;

pub type CmdResult<T> = jam_on::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub project_dir: PathBuf,
}

impl GlobalArgs {
    /// The project directory, which must already exist.
    pub fn project_root(&self) -> jam_on::Result<&Path> {
        if !self.project_dir.is_dir() {
            return Err(Error::validation_invalid_argument(
                "projectDir",
                "Project directory does not exist",
                Some(self.project_dir.display().to_string()),
                None,
            ));
        }
        Ok(&self.project_dir)
    }
}

/// Ask before a destructive step. `--yes` skips the question; without it a
/// non-interactive session is an error rather than a silent "no".
pub(crate) fn confirm(prompts: &PromptEngine, yes: bool, question: &str) -> jam_on::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !prompts.is_interactive() {
        return Err(Error::validation_invalid_argument(
            "yes",
            "Confirmation required but no terminal is attached",
            None,
            None,
        )
        .with_hint("Rerun with --yes to proceed without prompting"));
    }

    let confirmed = prompts.yes_no(&YesNoPrompt {
        question: question.to_string(),
        default: false,
    });
    if !confirmed {
        jam_on::tty::status("Aborted, nothing was changed.");
    }
    Ok(confirmed)
}

pub mod config;
pub mod locale;
pub mod new;
pub mod update;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (jam_on::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::New(args) => dispatch!(args, global, new),
        crate::Commands::Update(args) => dispatch!(args, global, update),
        crate::Commands::Locale(args) => dispatch!(args, global, locale),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
