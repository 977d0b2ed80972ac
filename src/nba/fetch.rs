//! Per-category stat fetching across seasons and season types.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::cli::types::{season_label, EntityType, Season, SeasonType, StatCategory};
use crate::nba::{
    http::StatsApi,
    normalize::{records_from_response, StatRecord},
    params::{category_request, DateFilters},
};
use crate::{Result, StatsError};

/// What to fetch for one category.
#[derive(Debug, Clone)]
pub struct StatQuery {
    pub category: StatCategory,
    pub entity: EntityType,
    pub seasons: Vec<Season>,
    pub season_types: Vec<SeasonType>,
    pub filters: DateFilters,
}

impl StatQuery {
    pub fn new(category: StatCategory, season: Season, season_type: SeasonType) -> Self {
        Self {
            category,
            entity: EntityType::default(),
            seasons: vec![season],
            season_types: vec![season_type],
            filters: DateFilters::default(),
        }
    }

    pub fn with_entity(mut self, entity: EntityType) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_filters(mut self, filters: DateFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// One request per (season, season type), seasons outermost, each preceded by `delay`.
///
/// Every record is tagged with `SEASON = "{season} {season_type}"`. The first
/// failing request aborts the whole fetch.
pub async fn fetch_category_stats<A: StatsApi>(
    api: &A,
    query: &StatQuery,
    delay: Duration,
) -> Result<Vec<StatRecord>> {
    if query.seasons.is_empty() || query.season_types.is_empty() {
        return Err(StatsError::InvalidParameter {
            message: format!(
                "{} needs at least one season and one season type",
                query.category
            ),
        });
    }

    let mut all_season_stats = Vec::new();
    for season in &query.seasons {
        for &season_type in &query.season_types {
            tokio::time::sleep(delay).await;

            let (endpoint, params) =
                category_request(query.category, query.entity, season, season_type, &query.filters);
            let response = api.get_json(endpoint, &params).await?;
            let mut stats = records_from_response(&response, 0)?;

            let label = season_label(season, season_type);
            debug!(category = %query.category, season = %label, rows = stats.len(), "fetched");
            for stat in &mut stats {
                stat.insert("SEASON".to_string(), Value::String(label.clone()));
            }
            all_season_stats.extend(stats);
        }
    }

    info!(category = %query.category, rows = all_season_stats.len(), "category fetched");
    Ok(all_season_stats)
}
