//! Composite scores computed from the merged table.
//!
//! SPR is a box-score weighted sum. STPR weighs tracking, hustle and box-score
//! columns, then normalizes per 100 possessions (pace × minutes / 48) and
//! shifts by 5.

use std::path::Path;

use serde_json::{Number, Value};
use tracing::info;

use crate::core::{read_table_csv, write_table_csv, Table};
use crate::Result;

/// Raw STPR weights. Suffixes follow the merge: `_y` is the right-hand copy of a
/// tracking/hustle column, `_ic` the Base boxscore copy.
pub const STPR_WEIGHTS: [(&str, f64); 31] = [
    ("DRIVE_PASSES", 0.24),
    ("DRIVES", -0.24),
    ("PULL_UP_FGA", -0.24),
    ("CATCH_SHOOT_FGA", -0.24),
    ("ELBOW_TOUCHES", -0.32),
    ("POST_TOUCHES", -0.08),
    ("PAINT_TOUCHES", 0.08),
    ("POTENTIAL_AST", 0.32),
    ("PULL_UP_PTS_y", 0.16),
    ("CATCH_SHOOT_PTS_y", -0.08),
    ("DRIVE_PTS_y", 0.16),
    ("PAINT_TOUCH_PTS", -0.08),
    ("POST_TOUCH_PTS", 0.40),
    ("ELBOW_TOUCH_PTS", -0.32),
    ("DEFLECTIONS", 0.72),
    ("SCREEN_ASSISTS", 0.16),
    ("OFF_BOXOUTS", 0.08),
    ("DEF_BOXOUTS", 0.12),
    ("FGM_ic", -0.56),
    ("FGA_ic", -0.48),
    ("FTM", 2.00),
    ("FTA", -1.36),
    ("OREB", 0.40),
    ("TOV", -0.96),
    ("PF", -0.72),
    ("PTS", 0.80),
    ("STL_y", 1.44),
    ("BLK_y", 0.08),
    ("DREB_y", 0.40),
    ("DEF_RIM_FGM", -2.00),
    ("DEF_RIM_FGA", 1.04),
];

pub const SPR_WEIGHTS: [(&str, f64); 10] = [
    ("PTS", 1.0),
    ("FGA_ic", -1.0),
    ("FG3A", 0.2),
    ("FTA", -0.3),
    ("OREB", 0.3),
    ("DREB_y", 0.2),
    ("AST_y", 0.5),
    ("STL_y", 1.5),
    ("BLK_y", 0.7),
    ("TOV", -1.2),
];

/// Columns read back from the merged file.
pub const INPUT_COLUMNS: [&str; 40] = [
    "PLAYER_NAME",
    "TEAM_ABBREVIATION",
    "DRIVES",
    "DRIVE_PASSES",
    "PULL_UP_FGA",
    "CATCH_SHOOT_FGA",
    "ELBOW_TOUCHES",
    "POST_TOUCHES",
    "PAINT_TOUCHES",
    "POTENTIAL_AST",
    "PULL_UP_PTS_y",
    "CATCH_SHOOT_PTS_y",
    "DRIVE_PTS_y",
    "PAINT_TOUCH_PTS",
    "POST_TOUCH_PTS",
    "ELBOW_TOUCH_PTS",
    "DEFLECTIONS",
    "SCREEN_ASSISTS",
    "OFF_BOXOUTS",
    "DEF_BOXOUTS",
    "FGM_ic",
    "FGA_ic",
    "FTM",
    "FTA",
    "OREB",
    "TOV",
    "PF",
    "PTS",
    "STL_y",
    "BLK_y",
    "DREB_y",
    "DEF_RIM_FGM",
    "DEF_RIM_FGA",
    "FG3A",
    "AST_y",
    "TS_PCT",
    "USG_PCT",
    "PACE",
    "MIN_ic",
    "W_c",
];

/// Result file layout: output name and the merged column it comes from
/// (`None` for computed scores).
pub const RESULT_COLUMNS: [(&str, Option<&str>); 8] = [
    ("Name", Some("PLAYER_NAME")),
    ("Team", Some("TEAM_ABBREVIATION")),
    ("MIN", Some("MIN_ic")),
    ("TS", Some("TS_PCT")),
    ("USG", Some("USG_PCT")),
    ("SPR", None),
    ("STPR", None),
    ("w", Some("W_c")),
];

/// Numeric view of a cell; null and non-numeric text have no value.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Σ weight × column. Any missing input makes the whole sum missing.
pub fn weighted_sum<F>(weights: &[(&str, f64)], value_of: F) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    weights
        .iter()
        .map(|&(column, weight)| value_of(column).map(|v| v * weight))
        .sum()
}

pub fn spr<F: Fn(&str) -> Option<f64>>(value_of: F) -> Option<f64> {
    weighted_sum(&SPR_WEIGHTS, value_of)
}

pub fn raw_stpr<F: Fn(&str) -> Option<f64>>(value_of: F) -> Option<f64> {
    weighted_sum(&STPR_WEIGHTS, value_of)
}

pub fn stpr<F: Fn(&str) -> Option<f64>>(value_of: F) -> Option<f64> {
    let raw = raw_stpr(&value_of)?;
    let possessions = value_of("PACE")? * value_of("MIN_ic")? / 48.0;
    Some(raw / possessions * 100.0 - 5.0)
}

fn score_cell(score: Option<f64>) -> Value {
    score
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Build the result table (one row per merged row) from a merged table.
///
/// A merged table with no rows (no games in the range) may lack the input
/// columns; it yields a result table with headers only.
pub fn derive_result_table(merged: &Table) -> Result<Table> {
    let mut result = Table::new(RESULT_COLUMNS.iter().map(|(n, _)| n.to_string()).collect());
    if merged.is_empty() {
        return Ok(result);
    }

    let stats = merged.select(&INPUT_COLUMNS)?;
    for row in 0..stats.len() {
        let value_of = |column: &str| stats.value(row, column).and_then(as_number);
        let spr_score = spr(value_of);
        let stpr_score = stpr(value_of);

        let cells = RESULT_COLUMNS
            .iter()
            .map(|(name, source)| match (source, *name) {
                (Some(column), _) => stats.value(row, column).cloned().unwrap_or(Value::Null),
                (None, "SPR") => score_cell(spr_score),
                (None, _) => score_cell(stpr_score),
            })
            .collect();
        result.push_row(cells)?;
    }
    Ok(result)
}

/// Re-read the merged file, score every row and write the result file (no index column).
pub fn derive_scores_file(merged_path: &Path, result_path: &Path) -> Result<Table> {
    let merged = read_table_csv(merged_path)?;
    let result = derive_result_table(&merged)?;
    write_table_csv(&result, result_path, false)?;

    let scored = (0..result.len())
        .filter(|&r| result.value(r, "SPR").is_some_and(|v| !v.is_null()))
        .count();
    info!(
        rows = result.len(),
        scored,
        path = %result_path.display(),
        "result written"
    );
    Ok(result)
}

/// Handle the derive command
pub fn handle_derive(merged_path: &Path, result_path: &Path) -> Result<()> {
    let result = derive_scores_file(merged_path, result_path)?;
    print_result(&result);
    Ok(())
}

/// One line per player: name, team, minutes and both scores.
pub fn print_result(result: &Table) {
    for row in 0..result.len() {
        let text = |c: &str| {
            result
                .value(row, c)
                .map(crate::core::files::cell_text)
                .unwrap_or_default()
        };
        let score = |c: &str| {
            result
                .value(row, c)
                .and_then(as_number)
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string())
        };
        println!(
            "{} ({}) MIN {} SPR {} STPR {}",
            text("Name"),
            text("Team"),
            text("MIN"),
            score("SPR"),
            score("STPR"),
        );
    }
}
