use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use tracing::debug;

use super::raw_table::RawTable;
use super::utils::{is_missing, is_year_column, parse_value};
use super::{TidyRecord, TidyTable, CONTINENT_COLUMN, COUNTRY_COLUMN};

/// Unpivot the year columns of `raw` into one record per (row, year),
/// dropping missing values.
///
/// Records come out year by year, and within a year in row order.
pub fn melt(raw: &RawTable) -> Result<TidyTable> {
    let country_idx = raw
        .column_index(COUNTRY_COLUMN)
        .ok_or_else(|| anyhow!("missing identifier column {:?}", COUNTRY_COLUMN))?;
    let continent_idx = raw
        .column_index(CONTINENT_COLUMN)
        .ok_or_else(|| anyhow!("missing identifier column {:?}", CONTINENT_COLUMN))?;

    // repeated headers only count once
    let mut seen = HashSet::new();
    let mut year_columns: Vec<(usize, i32)> = Vec::new();
    for (i, name) in raw.headers.iter().enumerate() {
        if !seen.insert(name.as_str()) {
            continue;
        }
        if !is_year_column(name) {
            if !name.is_empty() && name.chars().all(char::is_numeric) {
                debug!(column = %name, "non-ASCII digit header kept out of the year columns");
            }
            continue;
        }
        let year: i32 = name
            .parse()
            .with_context(|| format!("year column {:?} is out of range", name))?;
        year_columns.push((i, year));
    }

    let mut records = Vec::with_capacity(year_columns.len() * raw.rows.len());
    let mut dropped = 0usize;
    for &(col, year) in &year_columns {
        for row in 0..raw.rows.len() {
            let cell = raw.cell(row, col);
            if is_missing(cell) {
                dropped += 1;
                continue;
            }
            let text = cell.unwrap_or_default();
            let value = parse_value(text).ok_or_else(|| {
                anyhow!(
                    "non-numeric value {:?} in column {:?} at row {}",
                    text,
                    raw.headers[col],
                    row
                )
            })?;
            let Some(value) = value else {
                dropped += 1;
                continue;
            };
            records.push(TidyRecord {
                country: raw.cell(row, country_idx).unwrap_or_default().to_string(),
                region: raw.cell(row, continent_idx).unwrap_or_default().to_string(),
                year,
                value,
            });
        }
    }

    debug!(
        years = year_columns.len(),
        rows = raw.rows.len(),
        kept = records.len(),
        dropped,
        "melted wide table"
    );
    Ok(TidyTable::new(records))
}
