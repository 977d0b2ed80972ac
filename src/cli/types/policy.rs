//! Policies controlling how the day-by-day loop reacts to gaps and lookups.

use std::fmt;

/// What to do when a day in the requested range has no games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GapPolicy {
    /// End the whole range at the first day without games, keeping earlier days.
    #[default]
    Stop,
    /// Move on to the next day.
    Skip,
}

impl fmt::Display for GapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GapPolicy::Stop => "stop",
            GapPolicy::Skip => "skip",
        };
        write!(f, "{}", s)
    }
}

/// What to do when a fetched player row has no entry in that day's player→team map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MissingTeamPolicy {
    /// Abort the run with [`crate::StatsError::MissingPlayerTeam`].
    #[default]
    Fail,
    /// Drop the row and log a warning.
    Skip,
}

impl fmt::Display for MissingTeamPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissingTeamPolicy::Fail => "fail",
            MissingTeamPolicy::Skip => "skip",
        };
        write!(f, "{}", s)
    }
}
