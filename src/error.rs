// src/error.rs
use thiserror::Error;

/// Failure taxonomy for the pipeline.
///
/// Row rejections are NOT errors — the normalizer reports those as
/// `Ok(None)`. Everything here aborts the current stage and the run.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Non-2xx status or transport failure while fetching the source page.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Row data so malformed it could not even be rejected cleanly.
    #[error("parse failed: {0}")]
    Parse(String),

    /// Reference-source (country→region) fetch or decode failure.
    #[error("enrichment failed: {0}")]
    Enrichment(String),

    /// Underlying store error: bad SQL, constraint violation, I/O.
    #[error("statement execution failed: {0}")]
    Execution(String),

    /// Statement verb outside the supported set; nothing was executed.
    #[error("unsupported statement type: {0}")]
    Unsupported(String),

    /// A stage-qualified wrapper added by the orchestrator.
    #[error("Error during {stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<EtlError>,
    },
}

impl EtlError {
    /// Wrap an error with the phase it surfaced in.
    pub fn during(stage: &'static str, source: EtlError) -> Self {
        EtlError::Stage { stage, source: Box::new(source) }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
