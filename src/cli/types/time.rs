//! Calendar and season types for the NBA stats API.

use crate::error::{Result, StatsError};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by every `stats.nba.com` date filter.
pub const API_DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar day, parsed from and printed as `MM/DD/YYYY`.
///
/// # Examples
///
/// ```rust
/// use nba_stats_merge::GameDate;
///
/// let date: GameDate = "03/07/2020".parse().unwrap();
/// assert_eq!(date.to_string(), "03/07/2020");
/// assert_eq!(date.succ().to_string(), "03/08/2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day.
    pub fn succ(&self) -> Self {
        Self(self.0 + Duration::days(1))
    }

    /// Every day from `self` through `end`, inclusive. Empty when `end` is earlier.
    pub fn days_through(self, end: GameDate) -> impl Iterator<Item = GameDate> {
        std::iter::successors(Some(self), |d| Some(d.succ())).take_while(move |d| *d <= end)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(API_DATE_FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), API_DATE_FORMAT)
            .map(Self)
            .map_err(|_| StatsError::InvalidDate {
                input: s.to_string(),
            })
    }
}

/// Season identifier as the API spells it, e.g. `2019-20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub String);

impl Season {
    /// Build the `YYYY-yy` label from the season's starting year.
    pub fn from_start_year(year: u16) -> Self {
        Self(format!("{}-{:02}", year, (year % 100 + 1) % 100))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidParameter {
            message: format!("season must look like 2019-20, got {:?}", s),
        };
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.parse().map_err(|_| invalid())?;
        if end.len() != 2 || Self::from_start_year(start).0 != s {
            return Err(invalid());
        }
        Ok(Self(s.to_string()))
    }
}

/// Part of the season a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SeasonType {
    PreSeason,
    RegularSeason,
    AllStar,
    Playoffs,
    PlayIn,
}

impl SeasonType {
    /// The exact spelling the API expects in `SeasonType`.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            SeasonType::PreSeason => "Pre Season",
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::AllStar => "All Star",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PlayIn => "PlayIn",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// `"{season} {season_type}"`, attached to every fetched record as `SEASON`.
pub fn season_label(season: &Season, season_type: SeasonType) -> String {
    format!("{} {}", season, season_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_date_parse_and_display() {
        let date: GameDate = "03/07/2020".parse().unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2020, 3, 7).unwrap());
        assert_eq!(date.to_string(), "03/07/2020");
    }

    #[test]
    fn test_game_date_rejects_other_formats() {
        assert!("2020-03-07".parse::<GameDate>().is_err());
        assert!("13/01/2020".parse::<GameDate>().is_err());
        assert!("".parse::<GameDate>().is_err());
    }

    #[test]
    fn test_days_through_crosses_month_boundary() {
        let start: GameDate = "02/28/2020".parse().unwrap();
        let end: GameDate = "03/01/2020".parse().unwrap();
        let days: Vec<String> = start.days_through(end).map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["02/28/2020", "02/29/2020", "03/01/2020"]);
    }

    #[test]
    fn test_days_through_empty_when_reversed() {
        let start: GameDate = "03/02/2020".parse().unwrap();
        let end: GameDate = "03/01/2020".parse().unwrap();
        assert_eq!(start.days_through(end).count(), 0);
    }

    #[test]
    fn test_season_from_start_year() {
        assert_eq!(Season::from_start_year(2019).as_str(), "2019-20");
        assert_eq!(Season::from_start_year(1999).as_str(), "1999-00");
        assert_eq!(Season::from_start_year(2009).as_str(), "2009-10");
    }

    #[test]
    fn test_season_from_str() {
        assert!("2019-20".parse::<Season>().is_ok());
        assert!("2019-21".parse::<Season>().is_err());
        assert!("2019".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_largest_start_year() {
        assert_eq!(Season::from_start_year(u16::MAX).as_str(), "65535-36");
        assert!("65535-00".parse::<Season>().is_err());
        assert!("65535-36".parse::<Season>().is_ok());
    }

    #[test]
    fn test_season_label() {
        let season = Season::from_start_year(2019);
        assert_eq!(
            season_label(&season, SeasonType::RegularSeason),
            "2019-20 Regular Season"
        );
        assert_eq!(season_label(&season, SeasonType::Playoffs), "2019-20 Playoffs");
    }
}
