// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line entry point of the README badge action.
//!
//! Inputs are read from the environment the Actions runner provides; every
//! value can also be passed as a flag for local runs.

use std::{ffi::OsString, process};

use clap::{Parser, error::ErrorKind};
use readme_badges::{
    ActionInputs, Error, EventContext, OctocrabContentApi, Outcome, RunConfig, actions,
    run_pipeline,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Command line interface for the badge action.
#[derive(Debug, Parser,)]
#[command(
    name = "readme-badges",
    version,
    about = "Insert status badges under the first README heading"
)]
struct Cli
{
    #[command(flatten)]
    inputs: ActionInputs,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    init_tracing();

    if let Err(failure,) = run().await {
        let message = failure.to_display_string();
        error!("{message}");
        actions::set_failed(&message,);
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),);
    // Stdout is reserved for workflow commands.
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(std::io::stderr,).init();
}

/// Parses the command line, turning usage errors into configuration errors.
///
/// Help and version requests print their output and exit immediately.
fn parse_cli<I, T,>(args: I,) -> Result<Cli, Error,>
where
    I: IntoIterator<Item = T,>,
    T: Into<OsString,> + Clone,
{
    Cli::try_parse_from(args,).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => Error::configuration(err.to_string(),),
    },)
}

/// Executes one pipeline run using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, network, decoding, and missing-heading errors.
async fn run() -> Result<(), Error,>
{
    let cli = parse_cli(std::env::args_os(),)?;
    let config = RunConfig::from_inputs(&cli.inputs,)?;
    let event = EventContext::load(cli.inputs.event_path.as_deref(),)?;
    let api = OctocrabContentApi::new(&config.token, config.api_url.as_deref(),)?;

    let outcome = run_pipeline(&config, &event, &api,).await?;
    report(&outcome,);

    Ok((),)
}

fn report(outcome: &Outcome,)
{
    match outcome {
        Outcome::Skipped {
            action,
        } => actions::debug(&format!("skipping: pull request action is {action}"),),
        Outcome::Unchanged {
            ..
        } => actions::notice("README badges already up to date",),
        Outcome::DryRun {
            sha,
        } => actions::notice(&format!("dry run: README would be updated to blob {sha}"),),
        Outcome::Updated {
            path,
            sha,
            ..
        } => actions::notice(&format!("added badges to {path} ({sha})"),),
    }
}

#[cfg(test)]
mod tests
{
    use clap::Parser;
    use readme_badges::{BadgeStyle, Error, RunConfig};

    use super::{Cli, parse_cli};

    #[test]
    fn cli_accepts_flag_inputs()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--token",
            "ghp_token",
            "--badges",
            "stars,forks",
            "--badge-style",
            "flat-square",
            "--repository",
            "octocat/hello-world",
            "--dry-run",
        ],)
        .expect("failed to parse CLI",);

        assert!(cli.inputs.dry_run);
        let config = RunConfig::from_inputs(&cli.inputs,).expect("valid inputs",);
        assert_eq!(config.badges, vec!["stars", "forks"]);
        assert_eq!(config.style, BadgeStyle::FlatSquare);
    }

    #[test]
    fn cli_requires_repository()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--token",
            "ghp_token",
            "--badges",
            "stars",
            "--repository",
        ],);

        assert!(result.is_err());
    }

    #[test]
    fn missing_token_is_configuration_error()
    {
        if std::env::var_os("INPUT_GITHUB_TOKEN",).is_some() {
            return;
        }

        let error = parse_cli([
            env!("CARGO_PKG_NAME"),
            "--badges",
            "stars",
            "--repository",
            "octocat/hello-world",
        ],)
        .expect_err("token is required",);

        match error {
            Error::Configuration {
                message,
            } => assert!(message.contains("--token"), "unexpected message: {message}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
