//! The full run: fetch every category over the date range, merge them into one
//! row per player-game, write the merged file and derive the scores from it.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::{BoxscoreMeasure, EntityType, GameDate, StatCategory, TrackingMeasure},
    commands::{
        derive::{derive_scores_file, print_result},
        game_logs::{generate_game_logs, GameLogOptions},
    },
    core::{write_table_csv, Suffixes, Table},
    nba::http::StatsApi,
    Result, StatsError,
};

/// Join keys between tracking tables, which are per game.
pub const TRACKING_KEYS: [&str; 7] = [
    "PLAYER_ID",
    "PLAYER_NAME",
    "SEASON",
    "TEAM_ABBREVIATION",
    "TEAM_ID",
    "GAME_ID",
    "OPPONENT_TEAM_ID",
];

/// Join keys for hustle and boxscore tables, which carry no game columns.
pub const SEASON_KEYS: [&str; 5] = [
    "PLAYER_ID",
    "PLAYER_NAME",
    "SEASON",
    "TEAM_ABBREVIATION",
    "TEAM_ID",
];

pub const DEFAULT_SUFFIXES: Suffixes<'static> = ("_x", "_y");
pub const BOXSCORE_SUFFIXES: Suffixes<'static> = ("_ic", "_c");

/// Categories in fetch order.
pub const CATEGORIES: [StatCategory; 10] = [
    StatCategory::Tracking(TrackingMeasure::Drives),
    StatCategory::Tracking(TrackingMeasure::Defense),
    StatCategory::Tracking(TrackingMeasure::CatchShoot),
    StatCategory::Tracking(TrackingMeasure::Passing),
    StatCategory::Tracking(TrackingMeasure::Possessions),
    StatCategory::Tracking(TrackingMeasure::PullUpShot),
    StatCategory::Tracking(TrackingMeasure::Efficiency),
    StatCategory::Hustle,
    StatCategory::Boxscore(BoxscoreMeasure::Base),
    StatCategory::Boxscore(BoxscoreMeasure::Advanced),
];

/// One fetched table per category.
#[derive(Debug, Clone, Default)]
pub struct CategoryTables {
    tables: Vec<(StatCategory, Table)>,
}

impl CategoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: StatCategory, table: Table) {
        match self.tables.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = table,
            None => self.tables.push((category, table)),
        }
    }

    pub fn get(&self, category: StatCategory) -> Result<&Table> {
        self.tables
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, t)| t)
            .ok_or_else(|| StatsError::InvalidParameter {
                message: format!("no table fetched for {}", category),
            })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Run the daily game-log generator for every entry of [`CATEGORIES`], in order.
pub async fn fetch_all_tables<A: StatsApi>(
    api: &A,
    date_from: GameDate,
    date_to: GameDate,
    options: &GameLogOptions,
) -> Result<CategoryTables> {
    let mut tables = CategoryTables::new();
    for category in CATEGORIES {
        let game_logs = generate_game_logs(api, category, date_from, date_to, options).await?;
        let table = Table::from_records(&game_logs);
        info!(%category, rows = table.len(), columns = table.columns().len(), "category fetched");
        tables.insert(category, table);
    }
    Ok(tables)
}

/// Fold the category tables into the merged table.
///
/// Tracking tables are chained on [`TRACKING_KEYS`] starting from Drives, then
/// hustle joins on [`SEASON_KEYS`]. Base and Advanced boxscores are joined
/// separately (`_ic`/`_c`) and the result is joined onto the tracking side.
pub fn merge_tables(tables: &CategoryTables) -> Result<Table> {
    let mut merged = tables
        .get(StatCategory::Tracking(TrackingMeasure::Drives))?
        .clone();
    for &measure in &TrackingMeasure::ALL[1..] {
        merged = merged.left_join(
            tables.get(StatCategory::Tracking(measure))?,
            &TRACKING_KEYS,
            DEFAULT_SUFFIXES,
        )?;
    }
    merged = merged.left_join(
        tables.get(StatCategory::Hustle)?,
        &SEASON_KEYS,
        DEFAULT_SUFFIXES,
    )?;

    let boxscore = tables
        .get(StatCategory::Boxscore(BoxscoreMeasure::Base))?
        .left_join(
            tables.get(StatCategory::Boxscore(BoxscoreMeasure::Advanced))?,
            &SEASON_KEYS,
            BOXSCORE_SUFFIXES,
        )?;

    merged.left_join(&boxscore, &SEASON_KEYS, DEFAULT_SUFFIXES)
}

/// Inputs of a full run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub date_from: GameDate,
    pub date_to: GameDate,
    pub options: GameLogOptions,
    pub merged_out: PathBuf,
    pub result_out: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub merged: Table,
    pub result: Table,
}

/// Fetch, merge, write `merged_out` (with index column), then derive `result_out` from it.
///
/// Only player rows can be merged: the join keys include `PLAYER_ID` and
/// `PLAYER_NAME`, so a team-entity run is rejected before any request.
pub async fn run_pipeline<A: StatsApi>(api: &A, config: &PipelineConfig) -> Result<PipelineOutput> {
    if config.options.entity != EntityType::Player {
        return Err(StatsError::InvalidParameter {
            message: format!(
                "a full run merges player rows only, got entity {}",
                config.options.entity
            ),
        });
    }
    info!(from = %config.date_from, to = %config.date_to, "starting run");

    let tables = fetch_all_tables(api, config.date_from, config.date_to, &config.options).await?;
    let merged = merge_tables(&tables)?;
    write_table_csv(&merged, &config.merged_out, true)?;
    info!(
        rows = merged.len(),
        columns = merged.columns().len(),
        path = %config.merged_out.display(),
        "merged table written"
    );

    let result = derive_scores_file(&config.merged_out, &config.result_out)?;
    Ok(PipelineOutput { merged, result })
}

/// Handle the run command
pub async fn handle_run<A: StatsApi>(api: &A, config: PipelineConfig) -> Result<()> {
    let output = run_pipeline(api, &config).await?;
    print_result(&output.result);
    println!(
        "{} merged rows written to {}, scores written to {}",
        output.merged.len(),
        config.merged_out.display(),
        config.result_out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn table(rows: Vec<Value>) -> Table {
        let records: Vec<_> = rows
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Table::from_records(&records)
    }

    fn tracking_row(stat: &str, value: i64) -> Value {
        json!({
            "PLAYER_ID": 2544,
            "PLAYER_NAME": "LeBron James",
            "TEAM_ID": 1610612747,
            "TEAM_ABBREVIATION": "LAL",
            "GP": 1,
            stat: value,
            "SEASON": "2019-20 Regular Season",
            "GAME_ID": "0021900900",
            "OPPONENT_TEAM_ID": 1610612746,
        })
    }

    fn season_row(extra: Value) -> Value {
        let mut row = json!({
            "PLAYER_ID": 2544,
            "PLAYER_NAME": "LeBron James",
            "TEAM_ID": 1610612747,
            "TEAM_ABBREVIATION": "LAL",
            "MIN": 35.5,
            "SEASON": "2019-20 Regular Season",
        });
        if let (Value::Object(row), Value::Object(extra)) = (&mut row, extra) {
            row.extend(extra);
        }
        row
    }

    fn all_tables() -> CategoryTables {
        let mut tables = CategoryTables::new();
        for measure in TrackingMeasure::ALL {
            let stat = format!("{}_STAT", measure.as_api_str().to_uppercase());
            tables.insert(StatCategory::Tracking(measure), table(vec![tracking_row(&stat, 3)]));
        }
        tables.insert(StatCategory::Hustle, table(vec![season_row(json!({"DEFLECTIONS": 4}))]));
        tables.insert(
            StatCategory::Boxscore(BoxscoreMeasure::Base),
            table(vec![season_row(json!({"FGM": 9, "PTS": 25}))]),
        );
        tables.insert(
            StatCategory::Boxscore(BoxscoreMeasure::Advanced),
            table(vec![season_row(json!({"FGM": 9, "PACE": 101.2}))]),
        );
        tables
    }

    #[test]
    fn test_categories_cover_every_measure_once() {
        assert_eq!(CATEGORIES.len(), 10);
        for (i, a) in CATEGORIES.iter().enumerate() {
            assert!(!CATEGORIES[i + 1..].contains(a), "{} listed twice", a);
        }
        assert_eq!(CATEGORIES[0], StatCategory::Tracking(TrackingMeasure::Drives));
    }

    #[test]
    fn test_merge_one_row_per_player_game() {
        let merged = merge_tables(&all_tables()).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.value(0, "DRIVES_STAT"), Some(&json!(3)));
        assert_eq!(merged.value(0, "EFFICIENCY_STAT"), Some(&json!(3)));
        assert_eq!(merged.value(0, "DEFLECTIONS"), Some(&json!(4)));
        assert_eq!(merged.value(0, "PACE"), Some(&json!(101.2)));
        assert_eq!(merged.value(0, "GAME_ID"), Some(&json!("0021900900")));
    }

    #[test]
    fn test_boxscore_overlaps_use_ic_and_c() {
        let merged = merge_tables(&all_tables()).unwrap();

        assert_eq!(merged.value(0, "FGM_ic"), Some(&json!(9)));
        assert_eq!(merged.value(0, "FGM_c"), Some(&json!(9)));
        assert!(merged.column_index("FGM").is_none());
        // MIN comes from hustle on the left and from both boxscores on the right
        assert_eq!(merged.value(0, "MIN_ic"), Some(&json!(35.5)));
        assert_eq!(merged.value(0, "MIN"), Some(&json!(35.5)));
    }

    #[test]
    fn test_players_without_tracking_rows_are_dropped() {
        let mut tables = all_tables();
        tables.insert(
            StatCategory::Boxscore(BoxscoreMeasure::Base),
            table(vec![
                season_row(json!({"FGM": 9})),
                json!({
                    "PLAYER_ID": 1, "PLAYER_NAME": "Bench", "TEAM_ID": 1610612747,
                    "TEAM_ABBREVIATION": "LAL", "SEASON": "2019-20 Regular Season", "FGM": 0,
                }),
            ]),
        );

        let merged = merge_tables(&tables).unwrap();
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let tables = CategoryTables::new();
        assert!(matches!(
            merge_tables(&tables),
            Err(StatsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_empty_fetch_merges_to_empty_table() {
        let mut tables = CategoryTables::new();
        for category in CATEGORIES {
            tables.insert(category, Table::from_records(&[]));
        }

        let merged = merge_tables(&tables).unwrap();
        assert!(merged.is_empty());
        assert_eq!(&merged.columns()[..7], &TRACKING_KEYS);
    }
}
