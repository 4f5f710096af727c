// src/json.rs
// Records-oriented JSON export of the enriched dataset.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::enrich::EnrichedRecord;
use crate::error::{EtlError, Result};

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "GDP_USD_billion")]
    gdp_usd_billion: f64,
    #[serde(rename = "Region")]
    region: Option<&'a str>,
    #[serde(rename = "Year")]
    year: i32,
}

/// Write the dataset as a pretty-printed JSON array of records.
pub fn write_records(path: impl AsRef<Path>, records: &[EnrichedRecord]) -> Result<()> {
    let shaped: Vec<JsonRecord> = records
        .iter()
        .map(|r| JsonRecord {
            country: &r.country,
            gdp_usd_billion: r.gdp_usd_billion,
            region: r.region.as_deref(),
            year: r.year,
        })
        .collect();

    let file = File::create(path.as_ref())
        .map_err(|e| EtlError::Execution(format!("create {:?}: {e}", path.as_ref())))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &shaped)
        .map_err(|e| EtlError::Execution(format!("write {:?}: {e}", path.as_ref())))
}
