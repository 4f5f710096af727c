// src/pipeline.rs
// The full run: extract → normalize (parallel) → enrich → sort → persist.
//
// Normalization is the only parallel stage: workers pull row indexes
// from a shared cursor and send results back unordered; extraction
// order is restored before the sort, so completion order never matters.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::enrich::{self, EnrichedRecord, RegionMap};
use crate::json;
use crate::error::{EtlError, Result};
use crate::extract::{self, RawRow};
use crate::log::{EventLog, Level};
use crate::normalize::{self, CleanRecord};
use crate::store::GdpStore;

/// Run phases, in order. `Failed` is reachable from any non-terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Extracting,
    Normalizing,
    Enriching,
    Sorting,
    Persisting,
    Done,
    Failed,
}

impl Stage {
    /// The coarse phase name used in stage-qualified error messages.
    pub fn phase(self) -> &'static str {
        match self {
            Stage::Idle | Stage::Extracting => "extraction",
            Stage::Normalizing | Stage::Enriching | Stage::Sorting => "transformation",
            Stage::Persisting => "load",
            Stage::Done | Stage::Failed => "run",
        }
    }
}

pub struct Pipeline<'a> {
    pub gdp_url: &'a str,
    pub region_url: &'a str,
    pub store: &'a GdpStore,
    pub log: &'a dyn EventLog,
    /// Also mirror the enriched dataset to a JSON file.
    pub json_out: Option<&'a Path>,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows_extracted: usize,
    pub records_loaded: usize,
    pub last_id: i64,
}

impl Pipeline<'_> {
    /// Execute one full run. Any stage failure aborts the run; nothing
    /// is persisted unless every prior stage succeeded, and the insert
    /// batch itself goes through as a single statement call.
    pub fn run(&self) -> Result<RunSummary> {
        self.log.record(Level::Info, "Start of extraction");
        let raw = self.guard(Stage::Extracting, extract::fetch_rows(self.gdp_url))?;
        self.log.record(Level::Info, "End of extraction");

        self.log.record(Level::Info, "Start of transformation");
        let rows_extracted = raw.len();
        let clean = self.guard(Stage::Normalizing, normalize_rows(raw))?;

        let regions = self.guard(Stage::Enriching, RegionMap::fetch(self.region_url))?;
        let mut records = enrich::join(clean, &regions);

        // Sorting stage is pure and infallible
        sort_by_gdp(&mut records);
        self.log.record(Level::Info, "End of transformation");

        self.log.record(Level::Info, "Start of load");
        let last_id = self.guard(Stage::Persisting, self.store.insert_batch(&records))?;
        if let Some(path) = self.json_out {
            self.guard(Stage::Persisting, json::write_records(path, &records))?;
        }
        self.log.record(Level::Info, "End of load");

        Ok(RunSummary {
            rows_extracted,
            records_loaded: records.len(),
            last_id,
        })
    }

    /// Log and stage-qualify a failure; pass successes through.
    fn guard<T>(&self, stage: Stage, result: Result<T>) -> Result<T> {
        result.map_err(|e| {
            let wrapped = EtlError::during(stage.phase(), e);
            self.log.record(Level::Error, &wrapped.to_string());
            wrapped
        })
    }
}

/// Normalize all rows across a bounded worker pool. Rejections are
/// dropped silently; the first malformed row fails the whole stage.
/// Output preserves extraction order (workers finish in any order).
pub fn normalize_rows(raw: Vec<RawRow>) -> Result<Vec<CleanRecord>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(raw.len());

    let rows = Arc::new(raw);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<(usize, Result<Option<CleanRecord>>)>();

    for _ in 0..workers {
        let rows = Arc::clone(&rows);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();

        thread::spawn(move || loop {
            let i = cursor.fetch_add(1, Ordering::Relaxed);
            if i >= rows.len() {
                break;
            }
            // Receiver may be gone if the stage already failed
            if tx.send((i, normalize::normalize(&rows[i]))).is_err() {
                break;
            }
        });
    }
    drop(tx); // main thread is sole receiver now

    let mut keyed: Vec<(usize, CleanRecord)> = Vec::with_capacity(rows.len());
    for (i, outcome) in rx {
        match outcome {
            Ok(Some(record)) => keyed.push((i, record)),
            Ok(None) => {} // expected rejection
            Err(e) => return Err(e),
        }
    }

    keyed.sort_unstable_by_key(|(i, _)| *i);
    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}

/// Stable descending sort by GDP; ties keep extraction order.
pub fn sort_by_gdp(records: &mut [EnrichedRecord]) {
    records.sort_by(|a, b| b.gdp_usd_billion.total_cmp(&a.gdp_usd_billion));
}
