//! CSV persistence for [`Table`]s.
//!
//! Files are written the way the downstream spreadsheets expect: an optional
//! leading index column with an empty header, nulls as empty cells. Reading
//! renames an empty header to `Unnamed: {i}` and repeated headers to `NAME.1`,
//! `NAME.2`, ... so every column stays addressable by name.

use std::{
    collections::HashMap,
    fs,
    io::{Read, Write},
    path::Path,
};

use serde_json::{Number, Value};

use crate::core::table::Table;
use crate::Result;

/// Text written for one cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Cell read back from text: empty is null, numbers are numbers, the rest stays text.
pub fn parse_cell(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::from(i);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Number::from_f64(f).map_or(Value::Null, Value::Number),
        // nan/inf have no JSON form
        Ok(_) => Value::Null,
        Err(_) => Value::String(text.to_string()),
    }
}

fn unique_headers(raw: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    raw.iter()
        .enumerate()
        .map(|(i, h)| {
            let name = if h.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                h.to_string()
            };
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            unique
        })
        .collect()
}

pub fn write_table<W: Write>(table: &Table, writer: W, with_index: bool) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = Vec::with_capacity(table.columns().len() + 1);
    if with_index {
        header.push("");
    }
    header.extend(table.columns().iter().map(String::as_str));
    w.write_record(&header)?;

    for (i, row) in table.rows().iter().enumerate() {
        let mut cells: Vec<String> = Vec::with_capacity(row.len() + 1);
        if with_index {
            cells.push(i.to_string());
        }
        cells.extend(row.iter().map(cell_text));
        w.write_record(&cells)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut r = csv::Reader::from_reader(reader);
    let mut table = Table::new(unique_headers(r.headers()?));
    for record in r.records() {
        let record = record?;
        table.push_row(record.iter().map(parse_cell).collect())?;
    }
    Ok(table)
}

/// Write `table` to `path`, creating parent directories.
pub fn write_table_csv(table: &Table, path: &Path, with_index: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_table(table, fs::File::create(path)?, with_index)
}

pub fn read_table_csv(path: &Path) -> Result<Table> {
    read_table(fs::File::open(path)?)
}
