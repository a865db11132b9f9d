use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use clap_complete::{generate, Shell};
use thiserror::Error;

use crate::mode::Mode;

// Start or stop the compose stack that lives next to this executable
#[derive(Parser, Clone, Debug)]
#[command(name = "composectl", version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Start the containers (`up -d`). Wins when combined with -d
    #[arg(short = 'u', long = "up")]
    pub up: bool,

    /// Stop the containers (`down`)
    #[arg(short = 'd', long = "down")]
    pub down: bool,

    /// Print the compose command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Compose program, e.g. "docker compose"
    #[arg(long, env = "COMPOSECTL_COMPOSE_BIN", value_name = "CMD")]
    pub compose_bin: Option<String>,

    /// Directory the compose and env files are resolved against
    #[arg(long, env = "COMPOSECTL_BASE_DIR", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub base_dir: Option<PathBuf>,

    /// Settings file (default: composectl.yml next to the executable)
    #[arg(long, env = "COMPOSECTL_CONFIG", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    #[arg(hide = true, value_parser = clap::value_parser!(OsString))]
    pub rest: Vec<OsString>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.up, self.down)
    }
}

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("no execution option given")]
    NoArguments,

    #[error(transparent)]
    Invalid(#[from] clap::Error),
}

impl UsageError {
    /// `--help` and `--version` come back from clap as errors but are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, UsageError::Invalid(err) if !err.use_stderr())
    }

    /// Text shown to the user: full help when nothing was passed, clap's
    /// message and usage otherwise.
    pub fn message(&self) -> String {
        match self {
            UsageError::NoArguments => Cli::command().render_help().to_string(),
            UsageError::Invalid(err) => err.render().to_string(),
        }
    }
}

/// Parses the full argument list, program name first. Never exits the process.
pub fn parse_args<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
    if args.len() <= 1 {
        return Err(UsageError::NoArguments);
    }

    Ok(Cli::try_parse_from(args)?)
}

pub fn print_completions(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
