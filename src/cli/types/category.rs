//! Stat categories and entity scope.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// Player tracking sub-measures served by `leaguedashptstats` (`PtMeasureType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingMeasure {
    Drives,
    Defense,
    CatchShoot,
    Passing,
    Possessions,
    PullUpShot,
    Efficiency,
}

impl TrackingMeasure {
    pub const ALL: [TrackingMeasure; 7] = [
        TrackingMeasure::Drives,
        TrackingMeasure::Defense,
        TrackingMeasure::CatchShoot,
        TrackingMeasure::Passing,
        TrackingMeasure::Possessions,
        TrackingMeasure::PullUpShot,
        TrackingMeasure::Efficiency,
    ];

    pub fn as_api_str(&self) -> &'static str {
        match self {
            TrackingMeasure::Drives => "Drives",
            TrackingMeasure::Defense => "Defense",
            TrackingMeasure::CatchShoot => "CatchShoot",
            TrackingMeasure::Passing => "Passing",
            TrackingMeasure::Possessions => "Possessions",
            TrackingMeasure::PullUpShot => "PullUpShot",
            TrackingMeasure::Efficiency => "Efficiency",
        }
    }
}

/// Boxscore measure types served by `leaguedashplayerstats` (`MeasureType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxscoreMeasure {
    Base,
    Advanced,
}

impl BoxscoreMeasure {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            BoxscoreMeasure::Base => "Base",
            BoxscoreMeasure::Advanced => "Advanced",
        }
    }
}

/// One fetchable stat table.
///
/// # Examples
///
/// ```rust
/// use nba_stats_merge::StatCategory;
///
/// let category: StatCategory = "PullUpShot".parse().unwrap();
/// assert!(category.is_tracking());
/// assert_eq!(category.to_string(), "PullUpShot");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Tracking(TrackingMeasure),
    Hustle,
    Boxscore(BoxscoreMeasure),
}

impl StatCategory {
    /// Tracking rows are per game, so they also carry game and opponent ids.
    pub fn is_tracking(&self) -> bool {
        matches!(self, StatCategory::Tracking(_))
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatCategory::Tracking(m) => f.write_str(m.as_api_str()),
            StatCategory::Hustle => f.write_str("Hustle"),
            StatCategory::Boxscore(m) => f.write_str(m.as_api_str()),
        }
    }
}

impl FromStr for StatCategory {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(m) = TrackingMeasure::ALL
            .iter()
            .find(|m| m.as_api_str().eq_ignore_ascii_case(s))
        {
            return Ok(StatCategory::Tracking(*m));
        }
        match s.to_ascii_lowercase().as_str() {
            "hustle" => Ok(StatCategory::Hustle),
            "base" => Ok(StatCategory::Boxscore(BoxscoreMeasure::Base)),
            "advanced" => Ok(StatCategory::Boxscore(BoxscoreMeasure::Advanced)),
            _ => Err(StatsError::InvalidParameter {
                message: format!("unknown stat category: {}", s),
            }),
        }
    }
}

/// Whether tracking stats are requested per player or per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum EntityType {
    #[default]
    Player,
    Team,
}

impl EntityType {
    /// Value for the `PlayerOrTeam` request parameter.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            EntityType::Player => "Player",
            EntityType::Team => "Team",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}
