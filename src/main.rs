use anyhow::{Context, Result};
use composectl::cli::{parse_args, print_completions, Cli};
use composectl::config::config::Settings;
use composectl::config::paths::{base_dir, ComposePaths};
use composectl::dispatch::{dispatch, ComposeTarget};
use composectl::docker_compose::docker_compose::{CommandRunner, DryRunRunner, SystemRunner};
use composectl::errors::ComposectlError;
use composectl::exitcode;
use composectl::logging::setup_logging;
use composectl::mode::Mode;
use std::process;

fn resolve_target(cli: &Cli) -> composectl::errors::Result<ComposeTarget> {
    let base_dir = base_dir(cli.base_dir.as_deref())?;
    tracing::debug!("Base directory {}", base_dir.display());

    let (settings, source) = Settings::discover(&base_dir, cli.config.as_deref())?;
    if let Some(source) = source {
        tracing::debug!("Settings loaded from {}", source.display());
    }

    Ok(ComposeTarget {
        compose_command: settings.compose_command(cli.compose_bin.as_deref())?,
        paths: ComposePaths::resolve(&base_dir, &settings),
    })
}

fn run(cli: &Cli) -> Result<i32> {
    let mode = cli.mode();
    let runner: &dyn CommandRunner = if cli.dry_run { &DryRunRunner } else { &SystemRunner };

    if mode != Mode::Unset && !cli.dry_run {
        // SIGINT reaches the child from the terminal; keep waiting for it.
        if let Err(err) = ctrlc::set_handler(|| tracing::info!("Interrupt received, waiting for compose to exit")) {
            tracing::warn!("Failed to install interrupt handler: {err}");
        }
    }

    let mut stdout = std::io::stdout();
    let code = dispatch(mode, || resolve_target(cli), runner, &mut stdout)
        .with_context(|| format!("Failed to run compose for mode {mode}"))?;

    Ok(code)
}

fn failure_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Up => "Failed to start containers",
        Mode::Down => "Failed to stop containers",
        Mode::Unset => "Failed to run composectl",
    }
}

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if err.is_informational() => {
            println!("{}", err.message().trim_end());
            process::exit(exitcode::OK)
        }
        Err(err) => {
            eprintln!("{}", err.message().trim_end());
            process::exit(exitcode::USAGE)
        }
    };

    setup_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut std::io::stdout());
        return;
    }

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{}", failure_message(cli.mode()));
            eprintln!("{err:#}");
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<ComposectlError>())
                .map(ComposectlError::exit_code)
                .unwrap_or(exitcode::SOFTWARE);
            process::exit(code)
        }
    }
}
