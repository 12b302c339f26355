use crate::{
    cli::Args,
    command::ShellCommandRunner,
    constants::prompts,
    error::Result,
    ignore::load_ignore_policy,
    ioutils::ensure_destination_absent,
    loader::get_template,
    prompt::{AutomaticPrompter, DialoguerPrompter, SingleChoicePrompter},
    setup::{run_setup, SetupConfig, SetupOutcome},
};
use console::style;
use std::path::Path;

/// Main CLI runner that wires arguments to the setup pipeline
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<SetupOutcome> {
        // Report an existing destination before anything else can fail.
        ensure_destination_absent(&self.args.destination)?;

        let config = self.build_config()?;
        let prompter = self.prompter();
        run_setup(&config, &ShellCommandRunner::new(), prompter.as_ref())
    }

    fn build_config(&self) -> Result<SetupConfig> {
        let template_root = get_template(self.args.template.as_deref())?;
        let ignore_policy = load_ignore_policy(&template_root, &self.args.ignore)?;

        let mut config =
            SetupConfig::new(template_root, &self.args.destination, entry_point_name());
        config.ignore_policy = ignore_policy;
        config.bundler = self.args.bundler.clone();
        config.build_mode = self.args.mode.clone();
        config.skip_install = self.args.skip_install;
        config.skip_git = self.args.skip_git;
        log::debug!("Setup configuration: {config:?}");
        Ok(config)
    }

    /// A preset package manager answers the prompt without a terminal.
    fn prompter(&self) -> Box<dyn SingleChoicePrompter> {
        match self.args.package_manager {
            Some(manager) => Box::new(
                AutomaticPrompter::new()
                    .with_choice_response(prompts::PACKAGE_MANAGER, manager.as_str()),
            ),
            None => Box::new(DialoguerPrompter::new()),
        }
    }
}

/// Basename of the running executable, never copied into a project.
pub fn entry_point_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| Path::new(&arg0).file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Prints the final message for a finished run.
pub fn print_outcome(outcome: &SetupOutcome) {
    match outcome {
        SetupOutcome::Completed(summary) => {
            println!();
            println!("{}", style("Express app setup complete with custom configurations!").green());
            println!("{}", style("Run the following command to start the server:").yellow());
            println!();
            println!("{}", style(summary.start_command()).blue());
            println!();
        }
        SetupOutcome::Interrupted => {
            println!("{}", style(prompts::INTERRUPTED).yellow());
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<SetupOutcome> {
    Runner::new(args).run()
}
