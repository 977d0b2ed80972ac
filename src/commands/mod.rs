//! Command implementations for the NBA stats merge CLI

pub mod derive;
pub mod game_logs;
pub mod merge;
