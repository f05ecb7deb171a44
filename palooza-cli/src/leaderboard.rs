//! Leaderboard command implementation for the Palooza CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use palooza_core::RatingRecord;
use palooza_core::leaderboard::{DEFAULT_LEADERBOARD_LIMIT, rank};
use serde::{Deserialize, Serialize};

use crate::input::{open_utf8_file, require_existing};
use crate::{
    ARG_LEADERBOARD_LIMIT, ARG_LEADERBOARD_RECORDS, CliError, ENV_LEADERBOARD_RECORDS, USAGE_PATH,
    write_json,
};

/// CLI arguments for the `leaderboard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank stored rating records by overall score, highest \
                 first. Records with equal scores keep their order in the \
                 input file.",
    about = "Rank stored rating records"
)]
#[ortho_config(prefix = "PALOOZA")]
pub(crate) struct LeaderboardArgs {
    /// Path to a JSON array of rating records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) records_path: Option<Utf8PathBuf>,
    /// Maximum number of records to print (defaults to 50).
    #[arg(long = ARG_LEADERBOARD_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl LeaderboardArgs {
    pub(crate) fn into_config(self) -> Result<LeaderboardConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LeaderboardConfig::try_from(merged)
    }
}

/// Resolved `leaderboard` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaderboardConfig {
    /// Path to the records file.
    pub(crate) records_path: Utf8PathBuf,
    /// Maximum number of ranked records.
    pub(crate) limit: usize,
}

impl TryFrom<LeaderboardArgs> for LeaderboardConfig {
    type Error = CliError;

    fn try_from(args: LeaderboardArgs) -> Result<Self, Self::Error> {
        let records_path = args.records_path.ok_or(CliError::MissingArgument {
            field: ARG_LEADERBOARD_RECORDS,
            usage: USAGE_PATH,
            env: ENV_LEADERBOARD_RECORDS,
        })?;
        Ok(Self {
            records_path,
            limit: args.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT),
        })
    }
}

pub(crate) fn run_leaderboard_with(
    args: LeaderboardArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.records_path, ARG_LEADERBOARD_RECORDS)?;
    let records = load_records(&config.records_path)?;
    log::debug!(
        "ranking {} records from {}",
        records.len(),
        config.records_path
    );
    write_json(writer, &rank(records, config.limit))
}

/// Loads a JSON array of [`RatingRecord`]s from disk.
pub(crate) fn load_records(path: &Utf8Path) -> Result<Vec<RatingRecord>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRecords {
        path: path.to_path_buf(),
        source,
    })
}
