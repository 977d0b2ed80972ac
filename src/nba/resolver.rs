//! Per-date lookups: which game and opponent each team had, and each player's team.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cli::types::{GameDate, GameId, PlayerId, Season, SeasonType, TeamId};
use crate::nba::{
    game_id::season_context,
    http::StatsApi,
    normalize::{records_from_named_set, records_from_response, StatRecord},
    params::{player_game_log_params, scoreboard_params, GAME_LOG_ENDPOINT, SCOREBOARD_ENDPOINT},
};
use crate::{Result, StatsError};

const GAME_HEADER_SET: &str = "GameHeader";

/// Everything known about one calendar day. Built fresh for every date.
#[derive(Debug, Clone, Default)]
pub struct DateMaps {
    pub team_game: HashMap<TeamId, GameId>,
    pub team_opponent: HashMap<TeamId, TeamId>,
    pub player_team: HashMap<PlayerId, TeamId>,
    /// Game id of the first scoreboard row, used to tell the season.
    pub first_game: Option<GameId>,
}

fn field<'a>(record: &'a StatRecord, name: &str) -> Result<&'a Value> {
    record
        .get(name)
        .ok_or_else(|| StatsError::malformed(format!("row has no {} column", name)))
}

fn team_field(record: &StatRecord, name: &str) -> Result<TeamId> {
    let v = field(record, name)?;
    TeamId::from_value(v).ok_or_else(|| StatsError::malformed(format!("bad {}: {}", name, v)))
}

/// Team/game/opponent maps for every game on the scoreboard for `date`.
pub async fn resolve_team_maps<A: StatsApi>(api: &A, date: GameDate) -> Result<DateMaps> {
    let response = api
        .get_json(SCOREBOARD_ENDPOINT, &scoreboard_params(date))
        .await?;
    let games = records_from_named_set(&response, GAME_HEADER_SET)?;

    let mut maps = DateMaps::default();
    for game in &games {
        let game_id_value = field(game, "GAME_ID")?;
        let game_id = GameId::from_value(game_id_value)
            .ok_or_else(|| StatsError::malformed(format!("bad GAME_ID: {}", game_id_value)))?;
        let home = team_field(game, "HOME_TEAM_ID")?;
        let visitor = team_field(game, "VISITOR_TEAM_ID")?;

        maps.team_game.insert(home, game_id.clone());
        maps.team_game.insert(visitor, game_id.clone());
        maps.team_opponent.insert(home, visitor);
        maps.team_opponent.insert(visitor, home);
        maps.first_game.get_or_insert(game_id);
    }

    debug!(%date, games = games.len(), "scoreboard resolved");
    Ok(maps)
}

/// Player → team for every player who logged a game on `date`.
pub async fn resolve_player_teams<A: StatsApi>(
    api: &A,
    date: GameDate,
    season: &Season,
    season_type: SeasonType,
) -> Result<HashMap<PlayerId, TeamId>> {
    let response = api
        .get_json(
            GAME_LOG_ENDPOINT,
            &player_game_log_params(date, season, season_type),
        )
        .await?;

    let mut player_team = HashMap::new();
    for line in records_from_response(&response, 0)? {
        let player_value = field(&line, "PLAYER_ID")?;
        let player = PlayerId::from_value(player_value)
            .ok_or_else(|| StatsError::malformed(format!("bad PLAYER_ID: {}", player_value)))?;
        player_team.insert(player, team_field(&line, "TEAM_ID")?);
    }

    debug!(%date, players = player_team.len(), "player teams resolved");
    Ok(player_team)
}

/// All maps for `date`. With no games the maps are empty and the game log is not queried.
pub async fn resolve_date<A: StatsApi>(api: &A, date: GameDate) -> Result<DateMaps> {
    let mut maps = resolve_team_maps(api, date).await?;
    if let Some(game_id) = &maps.first_game {
        let (season, season_type) = season_context(game_id)?;
        maps.player_team = resolve_player_teams(api, date, &season, season_type).await?;
    }
    Ok(maps)
}
