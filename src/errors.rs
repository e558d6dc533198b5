use std::fmt;
use std::io;

use thiserror::Error;

/// Enumerates the errors that abort a run.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents a failure to connect to the catalog or an unsuccessful
    /// HTTP status.
    #[error("Failed to query URL: {source}")]
    QueryFailed { source: reqwest::Error },

    /// Represents a failure while reading the response body.
    #[error("Failed to read response body: {source}")]
    ReadFailed { source: reqwest::Error },

    /// Represents a body that is not a valid search response.
    #[error("Failed to unmarshal response: {source}")]
    MalformedResponse { source: serde_json::Error },

    /// Represents a duration without the `-` between its two times.
    #[error("Failed to split duration {duration:?} into start and end time")]
    MissingSeparator { duration: String },

    /// Represents a start time that is not in `hh:mm AM` form.
    #[error("Failed to parse start time {value:?}: {source}")]
    InvalidStartTime {
        value: String,
        source: time::error::Parse,
    },

    /// Represents an end time that is not in `hh:mm AM` form.
    #[error("Failed to parse end time {value:?}: {source}")]
    InvalidEndTime {
        value: String,
        source: time::error::Parse,
    },

    /// Represents a failure to write the report.
    #[error("Failed to write report: {source}")]
    WriteFailed { source: io::Error },
}

impl CatalogError {
    /// Returns the pipeline stage the error occurred in.
    pub fn stage(&self) -> Stage {
        use CatalogError::*;

        match self {
            QueryFailed { .. } => Stage::Fetch,
            ReadFailed { .. } => Stage::Read,
            MalformedResponse { .. } => Stage::Decode,
            MissingSeparator { .. } | InvalidStartTime { .. } | InvalidEndTime { .. } => {
                Stage::Normalize
            }
            WriteFailed { .. } => Stage::Report,
        }
    }
}

/// The stages of a run, used as log context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Read,
    Decode,
    Normalize,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Normalize => "normalize",
            Stage::Report => "report",
        };

        f.write_str(name)
    }
}
