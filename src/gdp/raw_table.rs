use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

/// The wide table exactly as the CSV lays it out.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field). Short rows are kept short.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (`row`, `col`), `None` when the row stops before `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Read a comma-separated table with a header row.
///
/// Rows shorter than the header are accepted; rows longer than it are rejected.
pub fn read_raw_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        if record.len() > headers.len() {
            bail!(
                "record {} has {} fields but the header has {}",
                idx,
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "read raw table");
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_header_and_ragged_rows() -> Result<()> {
        let content = "Country Name,Continent,1990,1991\nA,X,1,2\nB,Y,3\n";
        let raw = read_raw_table(Cursor::new(content))?;

        assert_eq!(raw.headers, vec!["Country Name", "Continent", "1990", "1991"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.cell(0, 3), Some("2"));
        assert_eq!(raw.cell(1, 2), Some("3"));
        assert_eq!(raw.cell(1, 3), None);
        assert_eq!(raw.column_index("Continent"), Some(1));
        assert_eq!(raw.column_index("Region"), None);
        Ok(())
    }

    #[test]
    fn strips_byte_order_mark() -> Result<()> {
        let content = "\u{feff}Country Name,Continent,2000\nA,X,1\n";
        let raw = read_raw_table(Cursor::new(content))?;
        assert_eq!(raw.headers[0], "Country Name");
        Ok(())
    }

    #[test]
    fn rejects_rows_longer_than_header() {
        let content = "Country Name,Continent,2000\nA,X,1,99\n";
        let err = read_raw_table(Cursor::new(content)).unwrap_err();
        assert!(err.to_string().contains("record 0"), "{err}");
    }

    #[test]
    fn quoted_fields_with_commas() -> Result<()> {
        let content = "Country Name,Continent,2000\n\"Korea, Rep.\",Asia,5\n";
        let raw = read_raw_table(Cursor::new(content))?;
        assert_eq!(raw.cell(0, 0), Some("Korea, Rep."));
        Ok(())
    }
}
