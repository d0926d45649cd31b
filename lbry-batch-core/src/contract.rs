//! # contract: interfaces to the outside world
//!
//! The publish pipeline talks to three collaborators, each behind a trait so
//! the orchestration can run against real clients or `mockall` mocks:
//!
//! - [`Daemon`]: the local publishing daemon (JSON-RPC style over HTTP).
//! - [`ThumbnailHost`]: the remote image host that returns a serve URL.
//! - [`Pacer`]: the pause inserted between two publishes.
//!
//! Transport implementations return the raw JSON body. Interpreting it
//! (`result` vs `data` vs `error`) is left to [`crate::response`], so every
//! implementation gets the same error semantics.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::error::TransportError;

/// Parameters of a `publish` call, in insertion order.
pub type PublishParams = Map<String, Value>;

#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Daemon: Send + Sync {
    /// `{"method": "version"}`; used as a connectivity check.
    async fn version(&self) -> Result<Value, TransportError>;

    /// `{"method": "ffmpeg_find"}`; reports whether transcoding is available.
    async fn ffmpeg_find(&self) -> Result<Value, TransportError>;

    /// `{"method": "publish", "params": params}`.
    async fn publish(&self, params: &PublishParams) -> Result<Value, TransportError>;
}

#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ThumbnailHost: Send + Sync {
    /// Uploads image bytes under `display_name`.
    async fn upload_thumbnail(
        &self,
        image: Vec<u8>,
        display_name: &str,
    ) -> Result<Value, TransportError>;
}

#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
