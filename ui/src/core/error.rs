//! Failure taxonomy for one load cycle.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The request never produced a response (network down, CORS, bad host).
    #[error("request for {path} failed: {reason}")]
    Fetch { path: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The score file was not the JSON object we expect.
    #[error("could not decode score file: {0}")]
    Decode(#[from] serde_json::Error),

    /// The selection no longer resolves against the catalog.
    #[error("no metric file {file} for model {model}")]
    UnknownSelection { model: String, file: String },
}
