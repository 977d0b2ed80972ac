//! A small column-ordered table of JSON cells, with the left join the merge stage needs.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::nba::normalize::StatRecord;
use crate::{Result, StatsError};


/// Suffixes given to overlapping non-key columns from the left and right side of a join.
pub type Suffixes<'a> = (&'a str, &'a str);

/// Column names may repeat (a chain of joins can produce the same suffixed name
/// twice); lookups by name resolve to the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Text used to compare join keys, so `1`, `1.0` and `"1"` are the same key.
pub fn key_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table in one go; columns are the union of record keys in first-seen order.
    pub fn from_records(records: &[StatRecord]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for record in records {
            for key in record.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|r| {
                columns
                    .iter()
                    .map(|c| r.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(StatsError::InvalidParameter {
                message: format!(
                    "row has {} cells for {} columns",
                    row.len(),
                    self.columns.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    fn require(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| StatsError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Keep only `columns`, in the order given.
    pub fn select(&self, columns: &[&str]) -> Result<Table> {
        let indices = columns
            .iter()
            .map(|c| self.require(c))
            .collect::<Result<Vec<usize>>>()?;

        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| indices.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        })
    }

    /// Key column positions. A table with no rows may lack key columns entirely
    /// (an empty category fetch has no columns at all).
    fn key_indices(&self, on: &[&str]) -> Result<Vec<Option<usize>>> {
        on.iter()
            .map(|k| match self.column_index(k) {
                Some(i) => Ok(Some(i)),
                None if self.is_empty() => Ok(None),
                None => Err(StatsError::MissingColumn {
                    column: k.to_string(),
                }),
            })
            .collect()
    }

    fn row_key(row: &[Value], key_indices: &[Option<usize>]) -> Vec<String> {
        key_indices
            .iter()
            .map(|i| i.map(|i| key_text(&row[i])).unwrap_or_default())
            .collect()
    }

    /// Left join on `on`.
    ///
    /// Output rows follow the left table: one per left row, or one per matching
    /// right row when the right side repeats a key. Unmatched left rows get null
    /// right-side cells and right rows with no left partner are dropped. Non-key
    /// columns present on both sides are renamed with `suffixes`.
    pub fn left_join(&self, right: &Table, on: &[&str], suffixes: Suffixes<'_>) -> Result<Table> {
        let left_keys = self.key_indices(on)?;
        let right_keys = right.key_indices(on)?;

        let is_key = |c: &str| on.iter().any(|k| *k == c);
        let left_names: HashSet<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|c| !is_key(*c))
            .collect();
        let right_cols: Vec<usize> = (0..right.columns.len())
            .filter(|&i| !is_key(right.columns[i].as_str()))
            .collect();
        let right_names: HashSet<&str> = right_cols
            .iter()
            .map(|&i| right.columns[i].as_str())
            .collect();

        let mut columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                if !is_key(c.as_str()) && right_names.contains(c.as_str()) {
                    format!("{}{}", c, suffixes.0)
                } else {
                    c.clone()
                }
            })
            .collect();
        let missing_left_keys: Vec<&str> = on
            .iter()
            .zip(&left_keys)
            .filter(|(_, i)| i.is_none())
            .map(|(k, _)| *k)
            .collect();
        columns.extend(missing_left_keys.iter().map(|k| k.to_string()));
        columns.extend(right_cols.iter().map(|&i| {
            let c = &right.columns[i];
            if left_names.contains(c.as_str()) {
                format!("{}{}", c, suffixes.1)
            } else {
                c.clone()
            }
        }));

        let mut index: HashMap<Vec<String>, Vec<usize>> = HashMap::new();
        for (i, row) in right.rows.iter().enumerate() {
            index
                .entry(Self::row_key(row, &right_keys))
                .or_default()
                .push(i);
        }

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let key = Self::row_key(row, &left_keys);
            match index.get(&key) {
                Some(matches) => {
                    for &m in matches {
                        let mut out = row.clone();
                        out.extend(right_cols.iter().map(|&i| right.rows[m][i].clone()));
                        rows.push(out);
                    }
                }
                None => {
                    let mut out = row.clone();
                    out.extend(std::iter::repeat(Value::Null).take(right_cols.len()));
                    rows.push(out);
                }
            }
        }

        Ok(Table { columns, rows })
    }
}
