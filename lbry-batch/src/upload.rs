#![doc = "HTTP clients for the daemon and the thumbnail host, implementing the core collaborator traits."]
//
//! # Upload clients
//!
//! [`DaemonClient`] speaks the daemon's JSON-RPC style protocol: a single
//! POST endpoint taking `{"method": ..., "params": ...}`.
//! [`SpeechClient`] posts thumbnails as multipart forms (`file` + `name`) to
//! the image host.
//!
//! Both return the decoded JSON body whatever the HTTP status; deciding
//! whether it holds a result or an error is the core's job
//! (see `lbry_batch_core::response`).

use std::time::Duration;

use async_trait::async_trait;
use lbry_batch_core::config::PublishConfig;
use lbry_batch_core::contract::{Daemon, PublishParams, ThumbnailHost};
use lbry_batch_core::error::TransportError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::{json, Value};

fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

async fn decode_json(response: Response) -> Result<Value, TransportError> {
    let status = response.status();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::error!(status = %status, error = ?e, "Response body is not JSON");
        format!("non-JSON response (HTTP {status}): {text}").into()
    })
}

pub struct DaemonClient {
    client: Client,
    url: String,
}

impl DaemonClient {
    pub fn new(config: &PublishConfig) -> Result<Self, reqwest::Error> {
        Self::with_url(config.daemon_url(), config.request_timeout)
    }

    pub fn with_url(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let url = url.into();
        tracing::info!(url = %url, ?timeout, "Initialized daemon client");
        Ok(DaemonClient {
            client: build_client(timeout)?,
            url,
        })
    }

    async fn call(&self, method: &str, params: Option<&PublishParams>) -> Result<Value, TransportError> {
        let mut body = json!({ "method": method });
        if let Some(params) = params {
            body["params"] = Value::Object(params.clone());
        }

        tracing::debug!(method, url = %self.url, "Calling daemon");
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(method, url = %self.url, error = %e, "Daemon request failed");
                e
            })?;
        decode_json(response).await
    }
}

#[async_trait]
impl Daemon for DaemonClient {
    async fn version(&self) -> Result<Value, TransportError> {
        self.call("version", None).await
    }

    async fn ffmpeg_find(&self) -> Result<Value, TransportError> {
        self.call("ffmpeg_find", None).await
    }

    async fn publish(&self, params: &PublishParams) -> Result<Value, TransportError> {
        self.call("publish", Some(params)).await
    }
}

pub struct SpeechClient {
    client: Client,
    endpoint: String,
}

impl SpeechClient {
    pub fn new(config: &PublishConfig) -> Result<Self, reqwest::Error> {
        Self::with_endpoint(config.thumbnail_endpoint.clone(), config.request_timeout)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let endpoint = endpoint.into();
        tracing::info!(endpoint = %endpoint, ?timeout, "Initialized thumbnail client");
        Ok(SpeechClient {
            client: build_client(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl ThumbnailHost for SpeechClient {
    async fn upload_thumbnail(
        &self,
        image: Vec<u8>,
        display_name: &str,
    ) -> Result<Value, TransportError> {
        let form = Form::new()
            .part("file", Part::bytes(image).file_name(display_name.to_string()))
            .text("name", display_name.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Thumbnail upload failed");
                e
            })?;
        decode_json(response).await
    }
}
