//! Turn the API's `headers` + `rowSet` tables into per-row records.
//!
//! Every stats endpoint answers with an envelope like
//!
//! ```json
//! { "resultSets": [ { "name": "...", "headers": ["A", "B"], "rowSet": [[1, 2], [3, 4]] } ] }
//! ```
//!
//! A few endpoints use a single `resultSet` object instead of the list.

use serde_json::{Map, Value};

use crate::{Result, StatsError};

#[cfg(test)]
mod tests;

/// One normalized row: column name to cell, in header order.
pub type StatRecord = Map<String, Value>;

fn result_sets(response: &Value) -> Result<Vec<&Value>> {
    if let Some(sets) = response.get("resultSets") {
        return match sets {
            Value::Array(sets) => Ok(sets.iter().collect()),
            // Some endpoints send the list as a single object
            Value::Object(_) => Ok(vec![sets]),
            _ => Err(StatsError::malformed("`resultSets` is not a list")),
        };
    }
    match response.get("resultSet") {
        Some(set @ Value::Object(_)) => Ok(vec![set]),
        _ => Err(StatsError::malformed("response has no result sets")),
    }
}

/// Records of the result set at `index`.
pub fn records_from_response(response: &Value, index: usize) -> Result<Vec<StatRecord>> {
    let sets = result_sets(response)?;
    let set = sets.get(index).ok_or_else(|| {
        StatsError::malformed(format!(
            "result set {} not found ({} present)",
            index,
            sets.len()
        ))
    })?;
    records_from_result_set(set)
}

/// Records of the result set called `name` (e.g. `GameHeader`).
pub fn records_from_named_set(response: &Value, name: &str) -> Result<Vec<StatRecord>> {
    let sets = result_sets(response)?;
    let set = sets
        .into_iter()
        .find(|s| s.get("name").and_then(Value::as_str) == Some(name))
        .ok_or_else(|| StatsError::malformed(format!("result set {:?} not found", name)))?;
    records_from_result_set(set)
}

fn records_from_result_set(set: &Value) -> Result<Vec<StatRecord>> {
    let headers = set
        .get("headers")
        .and_then(Value::as_array)
        .ok_or_else(|| StatsError::malformed("result set has no `headers` list"))?
        .iter()
        .map(|h| {
            h.as_str()
                .map(str::to_string)
                .ok_or_else(|| StatsError::malformed(format!("non-string header {}", h)))
        })
        .collect::<Result<Vec<String>>>()?;

    let rows = set
        .get("rowSet")
        .and_then(Value::as_array)
        .ok_or_else(|| StatsError::malformed("result set has no `rowSet` list"))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .as_array()
                .ok_or_else(|| StatsError::malformed(format!("row {} is not a list", i)))?;
            if cells.len() != headers.len() {
                return Err(StatsError::malformed(format!(
                    "row {} has {} cells for {} headers",
                    i,
                    cells.len(),
                    headers.len()
                )));
            }
            Ok(headers.iter().cloned().zip(cells.iter().cloned()).collect())
        })
        .collect()
}
