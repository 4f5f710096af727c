// src/normalize.rs
// Row-level cleaning. Pure: no shared state, no ordering dependency,
// safe to run one call per worker thread.

use crate::config::consts::{AGGREGATE_LABEL, MISSING};
use crate::core::sanitize::{normalize_ws, strip_footnote, strip_separators};
use crate::error::{EtlError, Result};
use crate::extract::RawRow;

/// A cleaned record. GDP is in billions of USD, two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub country: String,
    pub gdp_usd_billion: f64,
    pub year: i32,
}

/// Clean one raw row.
///
/// `Ok(None)` is an expected rejection (aggregate label, missing
/// sentinel) — silent, per row. `Err` means the row was malformed
/// beyond rejection (unparseable numerics) and aborts the run.
pub fn normalize(row: &RawRow) -> Result<Option<CleanRecord>> {
    let country = normalize_ws(&row.country);
    if country.is_empty() || country == AGGREGATE_LABEL {
        return Ok(None);
    }

    let gdp_text = row.gdp.trim();
    let year_text = row.year.trim();
    if gdp_text == MISSING || year_text == MISSING {
        return Ok(None);
    }

    let gdp_millions: f64 = strip_separators(gdp_text)
        .parse()
        .map_err(|_| EtlError::Parse(format!("bad GDP value {gdp_text:?} for {country}")))?;

    // Millions → billions, two decimals
    let gdp_usd_billion = (gdp_millions / 1000.0 * 100.0).round() / 100.0;

    let year: i32 = strip_footnote(year_text)
        .parse()
        .map_err(|_| EtlError::Parse(format!("bad year value {year_text:?} for {country}")))?;

    Ok(Some(CleanRecord { country, gdp_usd_billion, year }))
}
