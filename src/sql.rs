// src/sql.rs
// Generic statement execution against the SQLite store.
//
// A statement's kind is decided once, at construction, from its leading
// verb; the executor dispatches on that kind and returns the matching
// outcome shape. Each `run` opens its own connection and executes inside
// one transaction, committed before returning.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::error::{EtlError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `SELECT` / `WITH` — produces a row set.
    Query,
    /// `INSERT` — optionally batched; produces the last surrogate key.
    Insert,
    /// `UPDATE` / `DELETE` — produces an affected-row count.
    Mutate,
    /// `CREATE` — DDL; affected count (usually 0).
    DefineSchema,
    /// Anything else. Never executed.
    Unsupported,
}

/// A sanitized, classified statement.
#[derive(Debug, Clone)]
pub struct Statement {
    text: String,
    kind: StatementKind,
}

impl Statement {
    pub fn new(raw: &str) -> Self {
        let text = strip_comments(raw).trim().to_string();
        let kind = classify(&text);
        Statement { text, kind }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }
}

/// Remove `-- ...` line comments and `/* ... */` block comments
/// (block comments may span lines).
fn strip_comments(sql: &str) -> String {
    static LINE: OnceLock<Regex> = OnceLock::new();
    static BLOCK: OnceLock<Regex> = OnceLock::new();

    let line = LINE.get_or_init(|| Regex::new(r"--[^\n]*").unwrap());
    let block = BLOCK.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

    let out = line.replace_all(sql, "");
    block.replace_all(&out, "").into_owned()
}

fn classify(text: &str) -> StatementKind {
    let verb = match text.split_whitespace().next() {
        Some(v) => v.to_ascii_uppercase(),
        None => return StatementKind::Unsupported,
    };
    match verb.as_str() {
        "SELECT" | "WITH" => StatementKind::Query,
        "INSERT" => StatementKind::Insert,
        "UPDATE" | "DELETE" => StatementKind::Mutate,
        "CREATE" => StatementKind::DefineSchema,
        _ => StatementKind::Unsupported,
    }
}

/// Result shape, matched to the statement kind.
#[derive(Debug, PartialEq)]
pub enum ExecOutcome {
    Rows(Vec<Vec<Value>>),
    LastInsertId(i64),
    Affected(usize),
}

/// One parameter row for a batched insert.
pub type ParamRow = Vec<Value>;

/// Store handle: just the database path. Connections are per-call.
pub struct SqlExecutor {
    db_path: PathBuf,
}

impl SqlExecutor {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        SqlExecutor { db_path: db_path.into() }
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Execute one statement, with an optional parameter batch
    /// (only meaningful for `Insert`).
    pub fn run(&self, stmt: &Statement, batch: Option<&[ParamRow]>) -> Result<ExecOutcome> {
        if stmt.kind() == StatementKind::Unsupported {
            let verb = stmt.text().split_whitespace().next().unwrap_or("<empty>");
            return Err(EtlError::Unsupported(verb.to_string()));
        }
        self.execute(stmt, batch)
            .map_err(|e| EtlError::Execution(e.to_string()))
    }

    fn execute(
        &self,
        stmt: &Statement,
        batch: Option<&[ParamRow]>,
    ) -> rusqlite::Result<ExecOutcome> {
        let mut conn = Connection::open(&self.db_path)?;
        let tx = conn.transaction()?;

        let out = match stmt.kind() {
            StatementKind::Query => {
                let mut prepared = tx.prepare(stmt.text())?;
                let ncols = prepared.column_count();
                let rows = prepared
                    .query_map([], |row| {
                        let mut vals = Vec::with_capacity(ncols);
                        for i in 0..ncols {
                            vals.push(row.get::<_, Value>(i)?);
                        }
                        Ok(vals)
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                ExecOutcome::Rows(rows)
            }
            StatementKind::Insert => {
                {
                    let mut prepared = tx.prepare(stmt.text())?;
                    match batch {
                        Some(rows) => {
                            for row in rows {
                                prepared.execute(params_from_iter(row.iter()))?;
                            }
                        }
                        None => {
                            prepared.execute([])?;
                        }
                    }
                }
                ExecOutcome::LastInsertId(tx.last_insert_rowid())
            }
            StatementKind::Mutate | StatementKind::DefineSchema => {
                let n = tx.execute(stmt.text(), [])?;
                ExecOutcome::Affected(n)
            }
            StatementKind::Unsupported => unreachable!("filtered in run()"),
        };

        tx.commit()?;
        Ok(out)
    }
}
