// src/gdp/mod.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{error, info};

pub mod melt;
pub mod raw_table;
pub mod utils;

pub use melt::melt;
pub use raw_table::{read_raw_table, RawTable};
pub use utils::is_year_column;

/// Where the wide GDP table lives, relative to the working directory.
pub const DEFAULT_GDP_PATH: &str = "data/gdp_with_continent_filled.csv";

pub const COUNTRY_COLUMN: &str = "Country Name";
/// Source column that becomes `Region` in the tidy output.
pub const CONTINENT_COLUMN: &str = "Continent";

/// One observation in long format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    #[serde(rename = "Country Name")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// The reshaped, cleaned GDP table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TidyTable {
    records: Vec<TidyRecord>,
}

impl TidyTable {
    pub fn new(records: Vec<TidyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TidyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TidyRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<TidyRecord> {
        self.records
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.region.as_str()).collect()
    }

    /// Distinct countries, sorted.
    pub fn countries(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.country.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a TidyTable {
    type Item = &'a TidyRecord;
    type IntoIter = std::slice::Iter<'a, TidyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Load the GDP table from [`DEFAULT_GDP_PATH`], reshape it and drop missing values.
pub fn load_and_prepare_gdp_data() -> Result<Option<TidyTable>> {
    load_gdp_from(DEFAULT_GDP_PATH)
}

/// Read the wide CSV at `path` and return it in long format.
///
/// A missing file is logged and yields `Ok(None)`; every other failure is an `Err`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_gdp_from<P: AsRef<Path>>(path: P) -> Result<Option<TidyTable>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("GDP file not found");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open GDP file: {:?}", path));
        }
    };

    let raw = read_raw_table(BufReader::new(file))
        .with_context(|| format!("Failed to read GDP file: {:?}", path))?;
    let table = melt(&raw).with_context(|| format!("Failed to reshape GDP file: {:?}", path))?;

    info!(
        rows = raw.rows.len(),
        records = table.len(),
        "loaded GDP data"
    );
    Ok(Some(table))
}
