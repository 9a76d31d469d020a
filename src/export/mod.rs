// src/export/mod.rs

use anyhow::{Context, Result};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{
    fs::{self, File},
    path::Path,
    sync::Arc,
};
use tracing::info;

use crate::gdp::TidyTable;

pub mod arrow;

pub use self::arrow::{tidy_schema, to_record_batch};

/// Write `table` to `path` as a single-row-group Parquet file.
///
/// The file is written next to `path` first and renamed over it once closed.
/// Returns the size of the written file in bytes.
#[tracing::instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), records = table.len()))]
pub fn write_parquet<P: AsRef<Path>>(table: &TidyTable, path: P) -> Result<u64> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }

    let batch = to_record_batch(table)?;
    let tmp_path = path.with_extension("parquet.tmp");
    let file =
        File::create(&tmp_path).with_context(|| format!("creating output file {:?}", &tmp_path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, Arc::new(tidy_schema()), Some(props))
        .context("creating Arrow writer for tidy table")?;
    writer.write(&batch).context("writing tidy batch")?;
    writer.close().context("closing tidy writer")?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;

    let bytes = fs::metadata(path)?.len();
    info!(bytes, "wrote tidy parquet");
    Ok(bytes)
}
