//! Day-by-day game logs for one stat category.
//!
//! The stats endpoints only aggregate over a date range, so per-game rows are
//! produced by asking for one day at a time and stitching team, game and
//! opponent ids back on from that day's scoreboard.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    cli::types::{
        EntityType, GameDate, GapPolicy, MissingTeamPolicy, PlayerId, StatCategory, TeamId,
    },
    core::{write_table_csv, Table},
    nba::{
        fetch::{fetch_category_stats, StatQuery},
        game_id::season_context,
        http::StatsApi,
        normalize::StatRecord,
        params::DateFilters,
        resolver::{resolve_date, DateMaps},
    },
    Result, StatsError, DEFAULT_DELAY_MS,
};

/// Knobs for [`generate_game_logs`].
#[derive(Debug, Clone, Copy)]
pub struct GameLogOptions {
    pub entity: EntityType,
    pub gap_policy: GapPolicy,
    pub missing_team: MissingTeamPolicy,
    /// Pause before every stats request.
    pub delay: Duration,
}

impl Default for GameLogOptions {
    fn default() -> Self {
        Self {
            entity: EntityType::Player,
            gap_policy: GapPolicy::Stop,
            missing_team: MissingTeamPolicy::Fail,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

/// Which team a fetched row belongs to, or `None` when the row should be dropped.
fn team_for_record(
    record: &StatRecord,
    category: StatCategory,
    maps: &DateMaps,
    date: GameDate,
    options: &GameLogOptions,
) -> Result<Option<TeamId>> {
    if category.is_tracking() && options.entity == EntityType::Team {
        let value = record.get("TEAM_ID").unwrap_or(&Value::Null);
        return TeamId::from_value(value)
            .map(Some)
            .ok_or_else(|| StatsError::malformed(format!("bad TEAM_ID: {}", value)));
    }

    let value = record.get("PLAYER_ID").unwrap_or(&Value::Null);
    let player = PlayerId::from_value(value)
        .ok_or_else(|| StatsError::malformed(format!("bad PLAYER_ID: {}", value)))?;

    match (maps.player_team.get(&player), options.missing_team) {
        (Some(team), _) => Ok(Some(*team)),
        (None, MissingTeamPolicy::Fail) => Err(StatsError::MissingPlayerTeam {
            player_id: player.to_string(),
            date: date.to_string(),
        }),
        (None, MissingTeamPolicy::Skip) => {
            warn!(%player, %date, "no team for player, dropping row");
            Ok(None)
        }
    }
}

/// Attach `TEAM_ID` (and for tracking rows `GAME_ID` / `OPPONENT_TEAM_ID`) to one day's rows.
fn tag_day_records(
    records: Vec<StatRecord>,
    category: StatCategory,
    maps: &DateMaps,
    date: GameDate,
    options: &GameLogOptions,
) -> Result<Vec<StatRecord>> {
    let mut tagged = Vec::with_capacity(records.len());
    for mut record in records {
        let Some(team) = team_for_record(&record, category, maps, date, options)? else {
            continue;
        };

        if category.is_tracking() {
            let game = maps.team_game.get(&team);
            let opponent = maps.team_opponent.get(&team);
            let (Some(game), Some(opponent)) = (game, opponent) else {
                match options.missing_team {
                    MissingTeamPolicy::Fail => {
                        return Err(StatsError::malformed(format!(
                            "team {} is not on the {} scoreboard",
                            team, date
                        )))
                    }
                    MissingTeamPolicy::Skip => {
                        warn!(%team, %date, "team not on scoreboard, dropping row");
                        continue;
                    }
                }
            };
            record.insert("GAME_ID".to_string(), game.clone().into());
            record.insert("OPPONENT_TEAM_ID".to_string(), (*opponent).into());
        }
        record.insert("TEAM_ID".to_string(), team.into());
        tagged.push(record);
    }
    Ok(tagged)
}

/// Per-game rows for `category` on every day from `date_from` through `date_to`.
///
/// A day without games ends the range under [`GapPolicy::Stop`]: rows from
/// earlier days are returned and later days are never requested.
pub async fn generate_game_logs<A: StatsApi>(
    api: &A,
    category: StatCategory,
    date_from: GameDate,
    date_to: GameDate,
    options: &GameLogOptions,
) -> Result<Vec<StatRecord>> {
    let mut game_logs = Vec::new();

    for date in date_from.days_through(date_to) {
        let maps = resolve_date(api, date).await?;
        let Some(game_id) = maps.first_game.clone() else {
            match options.gap_policy {
                GapPolicy::Stop => {
                    info!(%category, %date, "no games, stopping");
                    return Ok(game_logs);
                }
                GapPolicy::Skip => {
                    info!(%category, %date, "no games, skipping day");
                    continue;
                }
            }
        };

        let (season, season_type) = season_context(&game_id)?;
        let query = StatQuery::new(category, season, season_type)
            .with_entity(options.entity)
            .with_filters(DateFilters::single_day(date));
        let day_logs = fetch_category_stats(api, &query, options.delay).await?;

        let tagged = tag_day_records(day_logs, category, &maps, date, options)?;
        info!(%category, %date, rows = tagged.len(), "day done");
        game_logs.extend(tagged);
    }

    Ok(game_logs)
}

/// Handle the fetch command: one category over a date range, written to CSV.
pub async fn handle_fetch<A: StatsApi>(
    api: &A,
    category: StatCategory,
    date_from: GameDate,
    date_to: GameDate,
    options: &GameLogOptions,
    out: PathBuf,
) -> Result<()> {
    let game_logs = generate_game_logs(api, category, date_from, date_to, options).await?;
    let table = Table::from_records(&game_logs);
    write_table_csv(&table, &out, false)?;

    println!("{} rows of {} written to {}", table.len(), category, out.display());
    Ok(())
}
