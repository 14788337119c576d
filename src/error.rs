use thiserror::Error;

#[derive(Error, Debug)]
pub enum CyclescanError {
    /// A visited-set could not be allocated. Fatal: the scan cannot
    /// continue without a full-domain membership structure.
    #[error("bit vector allocation failed: {0}")]
    Allocation(String),

    /// CSV report writing failure.
    #[error("report error: {0}")]
    Report(#[from] csv::Error),

    /// JSON report writing failure.
    #[error("json report error: {0}")]
    Json(#[from] serde_json::Error),

    /// Survey log read or write failure.
    #[error("survey log error: {0}")]
    Log(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}
