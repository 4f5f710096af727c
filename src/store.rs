// src/store.rs
// Persistence + the ranked aggregation queries, all through SqlExecutor.

use std::path::Path;

use rusqlite::types::Value;

use crate::config::consts::UNRESOLVED_REGION;
use crate::enrich::EnrichedRecord;
use crate::error::{EtlError, Result};
use crate::sql::{ExecOutcome, ParamRow, SqlExecutor, Statement};

/// Per-region mean over the top-N ranked records.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMean {
    pub region: String,
    pub mean_gdp: f64,
}

pub struct GdpStore {
    exec: SqlExecutor,
    table: String,
}

impl GdpStore {
    /// Open (creating the file if needed) and bootstrap the table.
    pub fn open(db_path: impl AsRef<Path>, table: &str) -> Result<Self> {
        let store = GdpStore {
            exec: SqlExecutor::new(db_path.as_ref()),
            table: table.to_string(),
        };
        store.ensure_table()?;
        Ok(store)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn executor(&self) -> &SqlExecutor {
        &self.exec
    }

    /// Idempotent schema bootstrap. `region` is NOT NULL: unresolved
    /// regions are persisted as the placeholder, never as NULL.
    fn ensure_table(&self) -> Result<()> {
        let ddl = Statement::new(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                country TEXT NOT NULL,
                gdp_usd_billion REAL NOT NULL,
                region TEXT NOT NULL,
                year INTEGER NOT NULL
            )",
            self.table
        ));
        self.exec.run(&ddl, None)?;
        Ok(())
    }

    /// Append the whole batch in one executor call; returns the last
    /// assigned surrogate key.
    pub fn insert_batch(&self, records: &[EnrichedRecord]) -> Result<i64> {
        let insert = Statement::new(&format!(
            "INSERT INTO {} (country, gdp_usd_billion, region, year) VALUES (?, ?, ?, ?)",
            self.table
        ));

        let batch: Vec<ParamRow> = records
            .iter()
            .map(|r| {
                vec![
                    Value::Text(r.country.clone()),
                    Value::Real(r.gdp_usd_billion),
                    Value::Text(
                        r.region.clone().unwrap_or_else(|| UNRESOLVED_REGION.to_string()),
                    ),
                    Value::Integer(r.year as i64),
                ]
            })
            .collect();

        match self.exec.run(&insert, Some(&batch))? {
            ExecOutcome::LastInsertId(id) => Ok(id),
            other => Err(EtlError::Execution(format!(
                "insert returned unexpected outcome: {other:?}"
            ))),
        }
    }

    /// Country names with GDP at or above `threshold` (billions).
    pub fn records_at_or_above(&self, threshold: f64) -> Result<Vec<String>> {
        let query = Statement::new(&format!(
            "SELECT country FROM {} WHERE gdp_usd_billion >= {threshold}",
            self.table
        ));

        let rows = self.query_rows(&query)?;
        rows.into_iter()
            .map(|row| match row.into_iter().next() {
                Some(Value::Text(name)) => Ok(name),
                other => Err(EtlError::Execution(format!(
                    "expected country text, got {other:?}"
                ))),
            })
            .collect()
    }

    /// Per region: the mean GDP over records ranked in the top `n` of
    /// that region. Competition ranking — ties share a rank, and every
    /// row with rank <= n counts, even past n rows. Ordered by mean
    /// descending, rounded to two decimals.
    pub fn top_n_mean_by_region(&self, n: u32) -> Result<Vec<RegionMean>> {
        let query = Statement::new(&format!(
            "WITH ranked AS (
                SELECT region, gdp_usd_billion,
                       RANK() OVER (
                           PARTITION BY region
                           ORDER BY gdp_usd_billion DESC
                       ) AS rank_in_region
                FROM {table}
            )
            SELECT region, ROUND(AVG(gdp_usd_billion), 2) AS mean_gdp
            FROM ranked
            WHERE rank_in_region <= {n}
            GROUP BY region
            ORDER BY mean_gdp DESC",
            table = self.table
        ));

        let rows = self.query_rows(&query)?;
        rows.into_iter()
            .map(|row| {
                let mut it = row.into_iter();
                match (it.next(), it.next()) {
                    (Some(Value::Text(region)), Some(mean)) => Ok(RegionMean {
                        region,
                        mean_gdp: value_to_f64(&mean)?,
                    }),
                    other => Err(EtlError::Execution(format!(
                        "expected (region, mean) row, got {other:?}"
                    ))),
                }
            })
            .collect()
    }

    fn query_rows(&self, query: &Statement) -> Result<Vec<Vec<Value>>> {
        match self.exec.run(query, None)? {
            ExecOutcome::Rows(rows) => Ok(rows),
            other => Err(EtlError::Execution(format!(
                "query returned unexpected outcome: {other:?}"
            ))),
        }
    }
}

fn value_to_f64(v: &Value) -> Result<f64> {
    match v {
        Value::Real(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        other => Err(EtlError::Execution(format!("expected number, got {other:?}"))),
    }
}
