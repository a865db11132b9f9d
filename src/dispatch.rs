use std::io::Write;

use crate::config::paths::ComposePaths;
use crate::docker_compose::docker_compose::{CommandRunner, ComposeCommand};
use crate::errors::Result;
use crate::exitcode;
use crate::mode::Mode;

/// Compose program and the files it is pointed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeTarget {
    pub compose_command: Vec<String>,
    pub paths: ComposePaths,
}

/// Prints the status line for `mode` and runs at most one compose command.
/// `resolve` is only called for `Up` and `Down`. Returns the exit code the
/// process should finish with.
pub fn dispatch<R, F>(mode: Mode, resolve: F, runner: &R, out: &mut dyn Write) -> Result<i32>
where
    R: CommandRunner + ?Sized,
    F: FnOnce() -> Result<ComposeTarget>,
{
    if mode == Mode::Unset {
        let _ = writeln!(out, "{}", mode.status_line());
        tracing::debug!("No execution option selected, nothing to run");
        return Ok(exitcode::OK);
    }

    let target = resolve()?;
    tracing::debug!(
        "Compose file {}, env file {}",
        target.paths.compose_file.display(),
        target.paths.env_file.display()
    );

    let command = ComposeCommand::for_mode(mode, &target.compose_command, &target.paths)?;

    let _ = writeln!(out, "{}", mode.status_line());
    match command {
        Some(command) => runner.run(&command, out),
        None => Ok(exitcode::OK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker_compose::docker_compose::DryRunRunner;
    use crate::errors::ComposectlError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<ComposeCommand>>,
        exit_code: i32,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &ComposeCommand, _out: &mut dyn Write) -> Result<i32> {
            self.calls.borrow_mut().push(command.clone());
            Ok(self.exit_code)
        }
    }

    fn target() -> ComposeTarget {
        ComposeTarget {
            compose_command: vec!["docker-compose".to_string()],
            paths: ComposePaths {
                compose_file: PathBuf::from("/srv/app/docker-compose.yml"),
                env_file: PathBuf::from("/srv/app/.env"),
            },
        }
    }

    fn run(mode: Mode, runner: &RecordingRunner) -> (i32, String) {
        let mut out = Vec::new();
        let code = dispatch(mode, || Ok(target()), runner, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_up_runs_single_up_command() {
        let runner = RecordingRunner::default();
        let (code, out) = run(Mode::Up, &runner);

        assert_eq!(code, 0);
        assert_eq!(out, "Starting up containers...\n");
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].to_string(),
            "docker-compose -f /srv/app/docker-compose.yml --env-file /srv/app/.env up -d"
        );
    }

    #[test]
    fn test_down_runs_single_down_command() {
        let runner = RecordingRunner::default();
        let (_, out) = run(Mode::Down, &runner);

        assert_eq!(out, "Shutting down containers...\n");
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args.last().map(String::as_str), Some("down"));
        assert!(!calls[0].args.contains(&"up".to_string()));
    }

    #[test]
    fn test_unset_runs_nothing() {
        let runner = RecordingRunner::default();
        let (code, out) = run(Mode::Unset, &runner);

        assert_eq!(code, 0);
        assert_eq!(out, "Unknown Execution Option.\n");
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_unset_skips_resolution() {
        let runner = RecordingRunner::default();
        let mut out = Vec::new();
        let code = dispatch(
            Mode::Unset,
            || Err(ComposectlError::EmptyComposeCommand),
            &runner,
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Unknown Execution Option.\n");
    }

    #[test]
    fn test_empty_compose_command_is_an_error() {
        let runner = RecordingRunner::default();
        let mut out = Vec::new();
        let empty = ComposeTarget {
            compose_command: vec![],
            ..target()
        };
        let err = dispatch(Mode::Up, || Ok(empty), &runner, &mut out).unwrap_err();

        assert!(matches!(err, ComposectlError::EmptyComposeCommand));
        assert!(out.is_empty());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_exit_code_propagated() {
        let runner = RecordingRunner {
            exit_code: 3,
            ..Default::default()
        };
        let (code, _) = run(Mode::Down, &runner);
        assert_eq!(code, 3);
    }

    #[test]
    fn test_dry_run_writes_command() {
        let mut out = Vec::new();
        let code = dispatch(Mode::Up, || Ok(target()), &DryRunRunner, &mut out).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Starting up containers...\n\
             docker-compose -f /srv/app/docker-compose.yml --env-file /srv/app/.env up -d\n"
        );
    }
}
