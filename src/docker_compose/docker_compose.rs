use std::fmt;
use std::io::Write;
use std::process::{Command, ExitStatus};

use crate::config::paths::ComposePaths;
use crate::errors::{ComposectlError, Result};
use crate::exitcode;
use crate::mode::Mode;

/// A fully built compose invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ComposeCommand {
    /// `<compose> -f <compose-file> --env-file <env-file> <verb...>`.
    /// Returns `None` for `Mode::Unset`.
    pub fn for_mode(
        mode: Mode,
        compose_command: &[String],
        paths: &ComposePaths,
    ) -> Result<Option<ComposeCommand>> {
        let verbs = match mode.compose_args() {
            Some(verbs) => verbs,
            None => return Ok(None),
        };
        let (program, leading_args) = compose_command
            .split_first()
            .ok_or(ComposectlError::EmptyComposeCommand)?;

        let mut args = leading_args.to_vec();
        args.push("-f".to_string());
        args.push(paths.compose_file.display().to_string());
        args.push("--env-file".to_string());
        args.push(paths.env_file.display().to_string());
        args.extend(verbs.iter().map(|verb| verb.to_string()));

        Ok(Some(ComposeCommand {
            program: program.clone(),
            args,
        }))
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Runs a compose command and reports the exit code it finished with.
pub trait CommandRunner {
    fn run(&self, command: &ComposeCommand, out: &mut dyn Write) -> Result<i32>;
}

/// Spawns the compose program with inherited stdio and waits for it.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ComposeCommand, out: &mut dyn Write) -> Result<i32> {
        tracing::info!("Running {command}");
        let _ = out.flush();

        let status = command
            .to_command()
            .status()
            .map_err(|source| ComposectlError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        tracing::debug!("{} exited with {status}", command.program);
        Ok(exit_code(status))
    }
}

/// Prints the command instead of running it.
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &ComposeCommand, out: &mut dyn Write) -> Result<i32> {
        let _ = writeln!(out, "{command}");
        Ok(exitcode::OK)
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => exitcode::SOFTWARE,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(exitcode::SOFTWARE)
}
