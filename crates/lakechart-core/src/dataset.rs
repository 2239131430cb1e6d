// File: crates/lakechart-core/src/dataset.rs
// Summary: CSV ingestion with a typed per-row parse that fails closed.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::record::DataRecord;

/// Required columns, matched case-sensitively. `SurfArea` is the upstream
/// source's spelling.
pub const YEAR_COLUMN: &str = "year";
pub const AREA_COLUMN: &str = "SurfArea";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: bad {column} value '{value}'")]
    BadField {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Load records from a CSV file with a header row.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<DataRecord>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;
    parse(&mut rdr)
}

/// Load records from any reader (tests, in-memory fetch results).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DataRecord>, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    parse(&mut rdr)
}

fn parse<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<DataRecord>, DatasetError> {
    let headers = rdr.headers()?.clone();
    let i_year = headers
        .iter()
        .position(|h| h == YEAR_COLUMN)
        .ok_or(DatasetError::MissingColumn(YEAR_COLUMN))?;
    let i_area = headers
        .iter()
        .position(|h| h == AREA_COLUMN)
        .ok_or(DatasetError::MissingColumn(AREA_COLUMN))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);

        let year_raw = rec.get(i_year).unwrap_or("").trim();
        let year = year_raw.parse::<i32>().map_err(|_| DatasetError::BadField {
            line,
            column: YEAR_COLUMN,
            value: year_raw.to_string(),
        })?;

        // An empty area field is a gap in the line; non-numeric text is a
        // per-row error rather than a silent NaN.
        let area_raw = rec.get(i_area).unwrap_or("").trim();
        let surface_area = if area_raw.is_empty() {
            None
        } else {
            Some(area_raw.parse::<f64>().map_err(|_| DatasetError::BadField {
                line,
                column: AREA_COLUMN,
                value: area_raw.to_string(),
            })?)
        };

        out.push(DataRecord { year, surface_area });
    }
    Ok(out)
}
