//! Error types shared by every stage of a publish run.
//!
//! Remote failures are split in two: a daemon or thumbnail host that reports a
//! structured `ValueError` becomes [`PublishError::Validation`] carrying the
//! remote message, while any other error shape is kept verbatim in
//! [`PublishError::UnexpectedResponse`] so callers can tell them apart.

use std::path::PathBuf;

use serde_json::Value;

use crate::publish::PublishReport;
use crate::response::ResponseField;

/// Boxed error returned by transport implementations of the collaborator traits.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The remote side rejected the request with a `ValueError`.
    #[error("{0}")]
    Validation(String),

    /// Neither the expected field nor a recognised error was present.
    #[error("response has no `{field}` field and no recognised error: {body}")]
    UnexpectedResponse { field: ResponseField, body: Value },

    #[error("publish result carries no claim id: {0}")]
    MissingClaimId(Value),

    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PublishError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PublishError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the remote `ValueError` path only.
    pub fn is_validation(&self) -> bool {
        matches!(self, PublishError::Validation(_))
    }
}

/// A batch that stopped early. Claims published before the failure stay valid
/// and are handed back in `completed`.
#[derive(Debug, thiserror::Error)]
#[error("publishing {file_name} failed after {} claim(s): {source}", completed.claims.len())]
pub struct BatchAborted {
    pub file_name: String,
    pub completed: PublishReport,
    #[source]
    pub source: PublishError,
}
