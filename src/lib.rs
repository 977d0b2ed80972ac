//! NBA Stats Merge Library
//!
//! Fetches player tracking, hustle and boxscore statistics from the public
//! `stats.nba.com` API one day at a time, merges the categories into a single
//! row per player-game and scores every row.
//!
//! ## Features
//!
//! - **Daily Game Logs**: Per-game rows built from single-day aggregate queries,
//!   tagged with team, game and opponent ids from that day's scoreboard
//! - **Merge Pipeline**: Fixed left-join plan over ten stat categories
//! - **Composite Scores**: SPR and pace-adjusted STPR computed from the merged table
//! - **Testable Transport**: The API sits behind [`nba::StatsApi`], with an
//!   in-memory fake in [`nba::testing`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats_merge::{commands::merge::*, commands::game_logs::GameLogOptions, nba::StatsClient};
//!
//! # async fn example() -> nba_stats_merge::Result<()> {
//! let api = StatsClient::from_env()?;
//! let config = PipelineConfig {
//!     date_from: "03/07/2020".parse()?,
//!     date_to: "03/08/2020".parse()?,
//!     options: GameLogOptions::default(),
//!     merged_out: "1.csv".into(),
//!     result_out: "2.csv".into(),
//! };
//!
//! let output = run_pipeline(&api, &config).await?;
//! println!("{} players scored", output.result.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_STATS_BASE_URL=https://stats.nba.com/stats
//! export NBA_STATS_DELAY_MS=2000
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::{GameDate, GameId, PlayerId, Season, SeasonType, StatCategory, TeamId};
pub use core::Table;
pub use error::{Result, StatsError};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const DELAY_MS_ENV_VAR: &str = "NBA_STATS_DELAY_MS";
pub const DEFAULT_DELAY_MS: u64 = 2000;
