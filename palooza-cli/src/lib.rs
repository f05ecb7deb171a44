//! Command-line interface for rating pigeons and ranking the results.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use palooza_core::landmark::landmarks;
use serde::Serialize;

mod error;
mod input;
mod leaderboard;
mod rate;

pub use error::CliError;

use leaderboard::{LeaderboardArgs, run_leaderboard_with};
use rate::{RateArgs, run_rate_with};

pub(crate) const ARG_RATE_PAYLOAD: &str = "payload";
pub(crate) const ARG_RATE_LANDMARK: &str = "landmark";
pub(crate) const ARG_RATE_SOURCE: &str = "source";
pub(crate) const ARG_RATE_SEED: &str = "seed";
pub(crate) const ARG_LEADERBOARD_RECORDS: &str = "records";
pub(crate) const ARG_LEADERBOARD_LIMIT: &str = "limit";
pub(crate) const USAGE_PATH: &str = "<path>";
pub(crate) const USAGE_RATE_LANDMARK: &str = "--landmark";
pub(crate) const ENV_RATE_PAYLOAD: &str = "PALOOZA_CMDS_RATE_PAYLOAD";
pub(crate) const ENV_RATE_LANDMARK: &str = "PALOOZA_CMDS_RATE_LANDMARK";
pub(crate) const ENV_LEADERBOARD_RECORDS: &str = "PALOOZA_CMDS_LEADERBOARD_RECORDS_PATH";

/// Run the Palooza CLI with the current process arguments and environment.
///
/// Command output is written to stdout.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration loading, input
/// access or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rate(args) => run_rate_with(args, writer),
        Command::Leaderboard(args) => run_leaderboard_with(args, writer),
        Command::Landmarks => write_landmarks(writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "palooza",
    about = "Rate New York pigeons and rank the results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose a rating record from an analysis payload.
    Rate(RateArgs),
    /// Rank stored rating records by overall score.
    Leaderboard(LeaderboardArgs),
    /// List the landmarks and the bonus each one earns.
    Landmarks,
}

fn write_landmarks(writer: &mut dyn Write) -> Result<(), CliError> {
    for entry in landmarks() {
        writeln!(writer, "{:>3}  {}", entry.bonus, entry.name).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
