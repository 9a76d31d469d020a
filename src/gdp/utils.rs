use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_COLUMN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Cell texts the dataframe reader treats as NaN by default.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// A header made purely of ASCII digits, e.g. `"1960"`.
pub fn is_year_column(name: &str) -> bool {
    YEAR_COLUMN.is_match(name)
}

pub fn is_missing(cell: Option<&str>) -> bool {
    match cell {
        None => true,
        Some(raw) => NA_TOKENS.contains(&raw.trim()),
    }
}

/// Parse a non-missing cell. `Ok(None)` means the text was a NaN literal.
pub fn parse_value(raw: &str) -> Option<Option<f64>> {
    let v: f64 = clean_str(raw).parse().ok()?;
    Some(if v.is_nan() { None } else { Some(v) })
}
