#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod args;
mod errors;
mod report;
mod trace;

use crate::{
    args::{wants_full_usage, Args},
    errors::Error,
    report::Reporter,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use council_configuration::{ConnectionConf, LogConfig};
use council_substrate::{build_proposal, ProposalClient};
use std::{
    io::{stdout, Write},
    process::exit,
};

/// Result returning generator `Error`
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
enum ExitCode {
    Ok = 0,
    Failure = 1,
}

/// Clap errors never reach the network. Help on request exits cleanly,
/// everything else is a usage failure. Short command lines also get the
/// full usage with examples. `given` counts the positionals supplied.
fn usage_exit(err: clap::Error, given: usize) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Ok,
        kind => {
            if wants_full_usage(kind, given) {
                let mut out = stdout();
                let _ = writeln!(out);
                let _ = Args::command().write_long_help(&mut out);
            }
            ExitCode::Failure
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.proposal_config()?;
    let conf = ConnectionConf::from_env(args.network, args.ws_endpoint())?;

    let mut reporter = Reporter::new(stdout());
    reporter.header(args.network, &config)?;

    let client = ProposalClient::connect(&conf).await?;

    // build and report, then disconnect on every path
    let outcome = build_proposal(&config, &client.encoder())
        .map_err(Error::from)
        .and_then(|bundle| {
            reporter.layers(&bundle)?;
            reporter.summary(args.network, &bundle, client.url())?;
            Ok(())
        });
    client.disconnect();

    outcome
}

/// Generator entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let given = std::env::args_os().len().saturating_sub(1);
            exit(usage_exit(err, given) as i32)
        }
    };

    if let Err(error) = trace::init_tracing(LogConfig::from_env()) {
        eprintln!("{}", error);
    }

    let code = match run(args).await {
        Ok(()) => ExitCode::Ok,
        Err(error) if error.is_validation() => {
            eprintln!("Error: {}", error);
            ExitCode::Failure
        }
        Err(error) => {
            tracing::error!(%error, "Proposal generation failed");
            eprintln!("Failed to generate council proposal: {}", error);
            ExitCode::Failure
        }
    };

    exit(code as i32)
}
