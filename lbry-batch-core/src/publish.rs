//! Publish pipeline: catalog entry → request → thumbnail → daemon → report.
//!
//! [`Publisher`] drives every catalogued file through the daemon in catalog
//! order, one at a time:
//!   - builds the request from the shared base parameters plus the entry's
//!     title, claim name, file path and optional description
//!   - uploads the thumbnail first when the entry has one
//!   - submits `publish` and records the returned claim id
//!   - pauses between consecutive items
//!
//! # Error Handling
//! Nothing is retried. The first failure stops the batch and comes back as a
//! [`BatchAborted`] that still carries every claim published before it.
//!
//! # Startup checks
//! [`Publisher::connect`] asks the daemon for its `version` (any failure is
//! fatal, so a wrong port fails before the first upload) and probes
//! `ffmpeg_find`, turning `optimize_file` off when transcoding is unavailable.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::PublishConfig;
use crate::contract::{Daemon, Pacer, PublishParams, ThumbnailHost};
use crate::error::{BatchAborted, PublishError};
use crate::naming::{claim_url, odysee_url, sanitize_claim_name};
use crate::response::{get_field, ResponseField};

/// One claim accepted by the daemon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedClaim {
    pub file_name: String,
    pub name: String,
    pub claim_id: String,
    pub claim_url: String,
    pub permanent_url: Option<String>,
    /// Browser link on odysee.com, derived from `permanent_url`.
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublishReport {
    pub claims: Vec<PublishedClaim>,
}

pub struct Publisher<D, T, P> {
    config: PublishConfig,
    daemon: D,
    thumbnails: T,
    pacer: P,
}

impl<D, T, P> Publisher<D, T, P>
where
    D: Daemon,
    T: ThumbnailHost,
    P: Pacer,
{
    /// Runs the startup checks against the daemon and returns a ready publisher.
    pub async fn connect(
        mut config: PublishConfig,
        daemon: D,
        thumbnails: T,
        pacer: P,
    ) -> Result<Self, PublishError> {
        config.validate()?;

        let version = daemon.version().await.map_err(|e| {
            error!(port = config.port, error = %e, "[PUBLISH][ERROR] Daemon unreachable");
            PublishError::Transport(e)
        })?;
        let version = get_field(&version, ResponseField::Result)?;
        info!(port = config.port, version = %version, "[PUBLISH] Daemon reachable");

        let ffmpeg = daemon.ffmpeg_find().await.map_err(PublishError::Transport)?;
        let available = get_field(&ffmpeg, ResponseField::Result)?
            .get("available")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !available && config.optimize_file {
            warn!("ffmpeg is not configured properly. --optimize-file set to False.");
            config.optimize_file = false;
        } else {
            debug!(available, "[PUBLISH] ffmpeg probe");
        }

        Ok(Self {
            config,
            daemon,
            thumbnails,
            pacer,
        })
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Parameters shared by every publish request of the run.
    pub fn base_params(&self) -> PublishParams {
        let config = &self.config;
        let mut params = PublishParams::new();
        params.insert("channel_name".into(), json!(config.channel_name));
        params.insert("bid".into(), json!(config.bid));
        if config.charges_fee() {
            params.insert("fee_currency".into(), json!("lbc"));
            params.insert("fee_amount".into(), json!(config.fee_amount));
        }
        if !config.tags.is_empty() {
            params.insert("tags".into(), json!(config.tags));
        }
        params.insert("languages".into(), json!(config.languages));
        if let Some(license) = config.license {
            params.insert("license".into(), json!(license.as_str()));
        }
        if let Some(url) = &config.license_url {
            params.insert("license_url".into(), json!(url));
        }
        params.insert("optimize_file".into(), json!(config.optimize_file));
        params.insert("validate_file".into(), json!(false));
        params.insert("blocking".into(), json!(false));
        params
    }

    /// The file handed to the daemon. With `optimize_file` the transcoded
    /// `{base}_fixed.{ext}` sibling is expected to exist already.
    pub fn input_file_name(&self, entry: &CatalogEntry) -> String {
        if self.config.optimize_file {
            format!("{}_fixed.{}", entry.base_name, entry.extension)
        } else {
            entry.file_name.clone()
        }
    }

    /// Builds the request for one entry, uploading its thumbnail on the way.
    pub async fn build_request(
        &self,
        entry: &CatalogEntry,
        base: &PublishParams,
    ) -> Result<PublishParams, PublishError> {
        let dir = &self.config.file_directory;
        let mut params = base.clone();
        params.insert("title".into(), json!(entry.base_name));
        params.insert("name".into(), json!(sanitize_claim_name(&entry.base_name)));

        let file_path = dir.join(self.input_file_name(entry));
        params.insert("file_path".into(), json!(file_path.display().to_string()));

        if let Some(description) = &entry.description {
            let path = dir.join(description);
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| PublishError::io(&path, e))?;
            params.insert("description".into(), json!(text));
        }

        if let Some(thumbnail) = &entry.thumbnail {
            let url = self.upload_thumbnail(thumbnail).await?;
            params.insert("thumbnail_url".into(), json!(url));
        }

        Ok(params)
    }

    async fn upload_thumbnail(&self, thumbnail: &str) -> Result<String, PublishError> {
        let path = self.config.file_directory.join(thumbnail);
        let image = tokio::fs::read(&path)
            .await
            .map_err(|e| PublishError::io(&path, e))?;

        info!(thumbnail = %thumbnail, bytes = image.len(), "[PUBLISH][THUMBNAIL] Uploading thumbnail");
        let body = self
            .thumbnails
            .upload_thumbnail(image, thumbnail)
            .await
            .map_err(PublishError::Transport)?;
        let data = get_field(&body, ResponseField::Data)?;
        match data.get("serveUrl").and_then(Value::as_str) {
            Some(url) => {
                info!(thumbnail = %thumbnail, url = %url, "[PUBLISH][THUMBNAIL] Thumbnail hosted");
                Ok(url.to_string())
            }
            None => Err(PublishError::UnexpectedResponse {
                field: ResponseField::Data,
                body,
            }),
        }
    }

    async fn publish_entry(
        &self,
        entry: &CatalogEntry,
        base: &PublishParams,
    ) -> Result<PublishedClaim, PublishError> {
        let params = self.build_request(entry, base).await?;
        let name = sanitize_claim_name(&entry.base_name);

        info!(file = %entry.file_name, name = %name, "[PUBLISH] Submitting publish request");
        let body = self
            .daemon
            .publish(&params)
            .await
            .map_err(PublishError::Transport)?;
        let result = get_field(&body, ResponseField::Result)?;

        let output = &result["outputs"][0];
        let claim_id = output["claim_id"]
            .as_str()
            .ok_or_else(|| PublishError::MissingClaimId(result.clone()))?
            .to_string();
        let permanent_url = output["permanent_url"].as_str().map(str::to_string);
        let web_url = permanent_url
            .as_deref()
            .and_then(|url| odysee_url(&self.config.channel_name, url));

        Ok(PublishedClaim {
            file_name: entry.file_name.clone(),
            claim_url: claim_url(&name, &claim_id),
            name,
            claim_id,
            permanent_url,
            web_url,
        })
    }

    /// Publishes every entry in catalog order, pausing between items.
    pub async fn publish_all(
        &self,
        catalog: &Catalog,
        base: &PublishParams,
    ) -> Result<PublishReport, BatchAborted> {
        info!(items = catalog.len(), "[PUBLISH] Starting batch publish");
        let mut report = PublishReport::default();

        for (index, entry) in catalog.iter().enumerate() {
            match self.publish_entry(entry, base).await {
                Ok(claim) => {
                    info!(
                        file = %claim.file_name,
                        claim_id = %claim.claim_id,
                        claim_url = %claim.claim_url,
                        "[PUBLISH] Published"
                    );
                    report.claims.push(claim);
                }
                Err(e) => {
                    error!(file = %entry.file_name, error = %e, "[PUBLISH][ERROR] Aborting batch");
                    return Err(BatchAborted {
                        file_name: entry.file_name.clone(),
                        completed: report,
                        source: e,
                    });
                }
            }

            if index + 1 < catalog.len() {
                debug!(delay = ?self.config.publish_delay, "[PUBLISH] Pausing before next item");
                self.pacer.pause(self.config.publish_delay).await;
            }
        }

        info!(claims = report.claims.len(), "[PUBLISH] Batch complete");
        Ok(report)
    }
}
