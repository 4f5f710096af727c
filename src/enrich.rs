// src/enrich.rs
// Country→region reference mapping, fetched from the REST source.
// Alias corrections are applied while building the map, so the join
// itself is an exact name lookup.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::consts::REGION_ALIASES;
use crate::core::net;
use crate::error::{EtlError, Result};
use crate::normalize::CleanRecord;

#[derive(Deserialize)]
struct CountryEntry {
    name: CountryName,
    region: String,
}

#[derive(Deserialize)]
struct CountryName {
    common: String,
}

/// Corrected country name → region.
#[derive(Debug)]
pub struct RegionMap {
    map: HashMap<String, String>,
}

impl RegionMap {
    /// Fetch and decode the reference source. Any failure is fatal to
    /// the run — there is no partial enrichment.
    pub fn fetch(url: &str) -> Result<Self> {
        let body = net::get_text(url).map_err(|e| EtlError::Enrichment(e.to_string()))?;
        Self::from_json(&body)
    }

    /// Decode a reference payload: `[{ name: { common }, region }, ...]`.
    pub fn from_json(body: &str) -> Result<Self> {
        let entries: Vec<CountryEntry> = serde_json::from_str(body)
            .map_err(|e| EtlError::Enrichment(format!("bad reference payload: {e}")))?;

        Ok(Self::from_entries(
            entries.into_iter().map(|e| (e.name.common, e.region)),
        ))
    }

    /// Build the map, applying the fixed alias table to each entry name.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map = HashMap::new();
        for (name, region) in entries {
            let corrected = REGION_ALIASES
                .iter()
                .find(|(from, _)| *from == name)
                .map(|(_, to)| s!(*to))
                .unwrap_or(name);
            map.insert(corrected, region);
        }
        RegionMap { map }
    }

    pub fn region_of(&self, country: &str) -> Option<&str> {
        self.map.get(country).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// A cleaned record plus its (possibly unresolved) region.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub country: String,
    pub gdp_usd_billion: f64,
    pub region: Option<String>,
    pub year: i32,
}

/// Left join: every record survives; `region` is `None` when the
/// alias-corrected mapping has no exact match.
pub fn join(records: Vec<CleanRecord>, regions: &RegionMap) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|r| {
            let region = regions.region_of(&r.country).map(|s| s.to_string());
            EnrichedRecord {
                country: r.country,
                gdp_usd_billion: r.gdp_usd_billion,
                region,
                year: r.year,
            }
        })
        .collect()
}
