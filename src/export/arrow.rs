use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array, Int32Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::gdp::TidyTable;

/// Column layout of the tidy table: `Country Name, Region, Year, Value`.
pub fn tidy_schema() -> Schema {
    Schema::new(vec![
        Field::new("Country Name", DataType::Utf8, false),
        Field::new("Region", DataType::Utf8, false),
        Field::new("Year", DataType::Int32, false),
        Field::new("Value", DataType::Float64, false),
    ])
}

pub fn to_record_batch(table: &TidyTable) -> Result<RecordBatch> {
    let country: StringArray = table.iter().map(|r| Some(r.country.as_str())).collect();
    let region: StringArray = table.iter().map(|r| Some(r.region.as_str())).collect();
    let year = Int32Array::from_iter_values(table.iter().map(|r| r.year));
    let value = Float64Array::from_iter_values(table.iter().map(|r| r.value));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(country),
        Arc::new(region),
        Arc::new(year),
        Arc::new(value),
    ];
    RecordBatch::try_new(Arc::new(tidy_schema()), columns).context("building tidy record batch")
}
