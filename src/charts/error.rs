use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The capture database file does not exist.
    #[error("Database not found")]
    StoreUnavailable,
    /// None of the requested metric ids are in the catalog.
    #[error("No valid metrics specified")]
    NoValidMetrics,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ChartError {
    /// Conditions the dashboard reports inline next to an empty chart rather
    /// than as a failed request.
    pub fn is_reportable(&self) -> bool {
        matches!(self, ChartError::StoreUnavailable | ChartError::NoValidMetrics)
    }
}
