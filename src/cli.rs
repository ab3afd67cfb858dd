//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Commit Hooks - Tag commit messages and canonicalize YAML before commit
#[derive(Parser, Debug)]
#[command(name = "commit-hooks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prefix the commit message with directory-derived tags
    Tag(commands::tag::TagArgs),

    /// Canonically sort mappings in YAML files
    SortYaml(commands::sort_yaml::SortYamlArgs),

    /// Normalize conda environment files
    FixEnv(commands::fix_env::FixEnvArgs),

    /// Install the prepare-commit-msg hook into a repository
    Install(commands::install::InstallArgs),

    /// Remove the commit-hooks prepare-commit-msg hook
    Uninstall(commands::install::UninstallArgs),

    /// Show hook installation status
    Status(commands::install::StatusArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    pub fn execute(self) -> Result<i32> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Tag(args) => commands::tag::execute(args),
            Commands::SortYaml(args) => commands::sort_yaml::execute(args),
            Commands::FixEnv(args) => commands::fix_env::execute(args),
            Commands::Install(args) => commands::install::execute_install(args).map(|()| 0),
            Commands::Uninstall(args) => commands::install::execute_uninstall(args).map(|()| 0),
            Commands::Status(args) => commands::install::execute_status(args).map(|()| 0),
            Commands::Completions(args) => commands::completions::execute(args).map(|()| 0),
        }
    }
}

/// Initialize the logger from the global `--log-level` flag.
fn init_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            eprintln!("Unknown log level `{}`, using `warn`", other);
            log::LevelFilter::Warn
        }
    };

    env_logger::Builder::new().filter_level(filter).init();
}
