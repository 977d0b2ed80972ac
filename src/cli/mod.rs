//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use types::{EntityType, GameDate, GapPolicy, MissingTeamPolicy, StatCategory};

use crate::commands::game_logs::GameLogOptions;

/// Inclusive date range, `MM/DD/YYYY`.
#[derive(Debug, Args)]
pub struct DateRange {
    /// First day to fetch (e.g. 03/07/2020).
    #[clap(long)]
    pub date_from: GameDate,

    /// Last day to fetch, inclusive.
    #[clap(long)]
    pub date_to: GameDate,
}

/// Options shared by every command that talks to the API
#[derive(Debug, Args)]
pub struct FetchOptions {
    /// Request tracking stats per player or per team (`run` merges player rows only).
    #[clap(long, value_enum, default_value_t = EntityType::Player)]
    pub entity: EntityType,

    /// What to do on a day without games.
    #[clap(long, value_enum, default_value_t = GapPolicy::Stop)]
    pub gap_policy: GapPolicy,

    /// What to do when a player has no team on the day's game log.
    #[clap(long, value_enum, default_value_t = MissingTeamPolicy::Fail)]
    pub missing_team: MissingTeamPolicy,

    /// Pause before every stats request, in milliseconds (or set `NBA_STATS_DELAY_MS`).
    #[clap(long, env = crate::DELAY_MS_ENV_VAR, default_value_t = crate::DEFAULT_DELAY_MS)]
    pub delay_ms: u64,
}

impl FetchOptions {
    pub fn game_log_options(&self) -> GameLogOptions {
        GameLogOptions {
            entity: self.entity,
            gap_policy: self.gap_policy,
            missing_team: self.missing_team,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every category, write the merged table and the scores.
    Run {
        #[clap(flatten)]
        range: DateRange,

        #[clap(flatten)]
        options: FetchOptions,

        /// Merged table output (written with an index column).
        #[clap(long, default_value = "1.csv")]
        merged_out: PathBuf,

        /// Scores output.
        #[clap(long, default_value = "2.csv")]
        result_out: PathBuf,
    },

    /// Fetch one category day by day and write its game logs.
    ///
    /// Categories: Drives, Defense, CatchShoot, Passing, Possessions,
    /// PullUpShot, Efficiency, Hustle, Base, Advanced.
    Fetch {
        /// Category to fetch (case-insensitive).
        #[clap(long, short)]
        category: StatCategory,

        #[clap(flatten)]
        range: DateRange,

        #[clap(flatten)]
        options: FetchOptions,

        /// Output file.
        #[clap(long, short)]
        out: PathBuf,
    },

    /// Recompute the scores file from an existing merged table.
    Derive {
        /// Merged table to read.
        #[clap(long, default_value = "1.csv")]
        merged: PathBuf,

        /// Scores output.
        #[clap(long, default_value = "2.csv")]
        result_out: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-stats-merge",
    about = "Fetch NBA tracking, hustle and boxscore stats and score players"
)]
pub struct NbaStats {
    /// Log at debug level (every request). `RUST_LOG` takes precedence.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
