//! Endpoint names and the fixed parameter sets each endpoint is queried with.

use crate::cli::types::{
    BoxscoreMeasure, EntityType, GameDate, Season, SeasonType, StatCategory, TrackingMeasure,
};
use crate::nba::http::Params;

pub const TRACKING_ENDPOINT: &str = "leaguedashptstats";
pub const HUSTLE_ENDPOINT: &str = "leaguehustlestatsplayer";
pub const BOXSCORE_ENDPOINT: &str = "leaguedashplayerstats";
pub const SCOREBOARD_ENDPOINT: &str = "scoreboardv2";
pub const GAME_LOG_ENDPOINT: &str = "leaguegamelog";

/// Optional `DateFrom`/`DateTo` filters; unset filters are sent as empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilters {
    pub date_from: Option<GameDate>,
    pub date_to: Option<GameDate>,
}

impl DateFilters {
    pub fn single_day(date: GameDate) -> Self {
        Self {
            date_from: Some(date),
            date_to: Some(date),
        }
    }

    fn from_param(&self) -> String {
        self.date_from.map(|d| d.to_string()).unwrap_or_default()
    }

    fn to_param(&self) -> String {
        self.date_to.map(|d| d.to_string()).unwrap_or_default()
    }
}

fn push(params: &mut Params, key: &str, value: impl ToString) {
    params.push((key.to_string(), value.to_string()));
}

/// Endpoint and parameters for one (season, season type) request of a category.
pub fn category_request(
    category: StatCategory,
    entity: EntityType,
    season: &Season,
    season_type: SeasonType,
    filters: &DateFilters,
) -> (&'static str, Params) {
    match category {
        StatCategory::Tracking(measure) => (
            TRACKING_ENDPOINT,
            tracking_params(measure, entity, season, season_type, filters),
        ),
        StatCategory::Hustle => (HUSTLE_ENDPOINT, hustle_params(season, season_type, filters)),
        StatCategory::Boxscore(measure) => (
            BOXSCORE_ENDPOINT,
            boxscore_params(measure, season, season_type, filters),
        ),
    }
}

pub fn tracking_params(
    measure: TrackingMeasure,
    entity: EntityType,
    season: &Season,
    season_type: SeasonType,
    filters: &DateFilters,
) -> Params {
    let mut p = Params::new();
    push(&mut p, "PlayerOrTeam", entity.as_api_str());
    push(&mut p, "PtMeasureType", measure.as_api_str());
    push(&mut p, "Season", season);
    push(&mut p, "SeasonType", season_type);
    push(&mut p, "PerMode", "Totals");
    push(&mut p, "LeagueID", "00");
    push(&mut p, "College", "");
    push(&mut p, "Conference", "");
    push(&mut p, "Country", "");
    push(&mut p, "DateFrom", filters.from_param());
    push(&mut p, "DateTo", filters.to_param());
    push(&mut p, "Division", "");
    push(&mut p, "DraftPick", "");
    push(&mut p, "DraftYear", "");
    push(&mut p, "GameScope", "");
    push(&mut p, "Height", "");
    push(&mut p, "LastNGames", 0);
    push(&mut p, "Location", "");
    push(&mut p, "Month", 0);
    push(&mut p, "OpponentTeamID", 0);
    push(&mut p, "Outcome", "");
    push(&mut p, "PORound", 0);
    push(&mut p, "PlayerExperience", "");
    push(&mut p, "PlayerPosition", "");
    push(&mut p, "SeasonSegment", "");
    push(&mut p, "StarterBench", "");
    push(&mut p, "TeamID", 0);
    push(&mut p, "VsConference", "");
    push(&mut p, "VsDivision", "");
    push(&mut p, "Weight", "");
    p
}

pub fn hustle_params(season: &Season, season_type: SeasonType, filters: &DateFilters) -> Params {
    let mut p = Params::new();
    push(&mut p, "Season", season);
    push(&mut p, "SeasonType", season_type);
    push(&mut p, "DateFrom", filters.from_param());
    push(&mut p, "DateTo", filters.to_param());
    push(&mut p, "GameScope", "");
    push(&mut p, "LastNGames", 0);
    push(&mut p, "LeagueID", "00");
    push(&mut p, "Location", "");
    push(&mut p, "Month", 0);
    push(&mut p, "OpponentTeamID", 0);
    push(&mut p, "Outcome", "");
    push(&mut p, "PerMode", "Totals");
    push(&mut p, "PlayerExperience", "");
    push(&mut p, "PlayerPosition", "");
    push(&mut p, "SeasonSegment", "");
    push(&mut p, "StarterBench", "");
    push(&mut p, "VsConference", "");
    push(&mut p, "VsDivision", "");
    p
}

pub fn boxscore_params(
    measure: BoxscoreMeasure,
    season: &Season,
    season_type: SeasonType,
    filters: &DateFilters,
) -> Params {
    let mut p = Params::new();
    push(&mut p, "College", "");
    push(&mut p, "Conference", "");
    push(&mut p, "Country", "");
    push(&mut p, "DateFrom", filters.from_param());
    push(&mut p, "DateTo", filters.to_param());
    push(&mut p, "Division", "");
    push(&mut p, "DraftPick", "");
    push(&mut p, "DraftYear", "");
    push(&mut p, "GameScope", "");
    push(&mut p, "GameSegment", "");
    push(&mut p, "Height", "");
    push(&mut p, "LastNGames", 0);
    push(&mut p, "LeagueID", "00");
    push(&mut p, "Location", "");
    push(&mut p, "MeasureType", measure.as_api_str());
    push(&mut p, "Month", 0);
    push(&mut p, "OpponentTeamID", 0);
    push(&mut p, "Outcome", "");
    push(&mut p, "PORound", 0);
    push(&mut p, "PaceAdjust", "N");
    push(&mut p, "PerMode", "Totals");
    push(&mut p, "Period", 0);
    push(&mut p, "PlayerExperience", "");
    push(&mut p, "PlayerPosition", "");
    push(&mut p, "PlusMinus", "N");
    push(&mut p, "Rank", "N");
    push(&mut p, "Season", season);
    push(&mut p, "SeasonSegment", "");
    push(&mut p, "SeasonType", season_type);
    push(&mut p, "ShotClockRange", "");
    push(&mut p, "StarterBench", "");
    push(&mut p, "TeamID", 0);
    push(&mut p, "TwoWay", 0);
    push(&mut p, "VsConference", "");
    push(&mut p, "VsDivision", "");
    push(&mut p, "Weight", "");
    p
}

pub fn scoreboard_params(date: GameDate) -> Params {
    let mut p = Params::new();
    push(&mut p, "DayOffset", 0);
    push(&mut p, "GameDate", date);
    push(&mut p, "LeagueID", "00");
    p
}

/// Player box score lines for a single day; used to learn each player's team.
pub fn player_game_log_params(date: GameDate, season: &Season, season_type: SeasonType) -> Params {
    let mut p = Params::new();
    push(&mut p, "Counter", 1000);
    push(&mut p, "DateFrom", date);
    push(&mut p, "DateTo", date);
    push(&mut p, "Direction", "DESC");
    push(&mut p, "LeagueID", "00");
    push(&mut p, "PlayerOrTeam", "P");
    push(&mut p, "Season", season);
    push(&mut p, "SeasonType", season_type);
    push(&mut p, "Sorter", "DATE");
    p
}

/// Look up a parameter by name.
pub fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
