use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the data core.
///
/// Every operation is a deterministic computation over static data, so none
/// of these is worth retrying: the caller reports it for the interaction
/// that triggered it and waits for the next one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashError {
    /// File missing, unreadable, or not matching the launch schema.
    #[error("data unavailable from {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("dataset contains no launch records")]
    EmptyDataset,

    #[error("invalid payload range [{low}, {high}]: low must not exceed high")]
    InvalidRange { low: f64, high: f64 },

    #[error("unknown launch site '{site}'")]
    UnknownSite { site: String },
}
