use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::PublishError;
use crate::languages::{is_known_language, language_name};

pub const DEFAULT_PORT: u16 = 5279;
pub const DEFAULT_BID: &str = "0.0001";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PUBLISH_DELAY: Duration = Duration::from_secs(10);
pub const DEFAULT_THUMBNAIL_ENDPOINT: &str = "https://spee.ch/api/claim/publish";

/// Publication licenses understood by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "Public Domain")]
    PublicDomain,
    #[serde(rename = "Creative Commons Attribution 4.0 International")]
    CcBy,
    #[serde(rename = "Creative Commons Attribution-ShareAlike 4.0 International")]
    CcBySa,
    #[serde(rename = "Creative Commons Attribution-NoDerivatives 4.0 International")]
    CcByNd,
    #[serde(rename = "Creative Commons Attribution-NonCommercial 4.0 International")]
    CcByNc,
    #[serde(rename = "Creative Commons Attribution-NonCommercial-ShareAlike 4.0 International")]
    CcByNcSa,
    #[serde(rename = "Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International")]
    CcByNcNd,
    #[serde(rename = "Copyrighted (All rights reserved)")]
    Copyrighted,
    /// Custom license; requires a license URL.
    Other,
}

impl License {
    pub const ALL: [License; 9] = [
        License::PublicDomain,
        License::CcBy,
        License::CcBySa,
        License::CcByNd,
        License::CcByNc,
        License::CcByNcSa,
        License::CcByNcNd,
        License::Copyrighted,
        License::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            License::PublicDomain => "Public Domain",
            License::CcBy => "Creative Commons Attribution 4.0 International",
            License::CcBySa => "Creative Commons Attribution-ShareAlike 4.0 International",
            License::CcByNd => "Creative Commons Attribution-NoDerivatives 4.0 International",
            License::CcByNc => "Creative Commons Attribution-NonCommercial 4.0 International",
            License::CcByNcSa => {
                "Creative Commons Attribution-NonCommercial-ShareAlike 4.0 International"
            }
            License::CcByNcNd => {
                "Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International"
            }
            License::Copyrighted => "Copyrighted (All rights reserved)",
            License::Other => "Other",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| {
                let choices: Vec<&str> = License::ALL.iter().map(License::as_str).collect();
                format!("unknown license '{s}', expected one of: {}", choices.join(", "))
            })
    }
}

/// Settings for one publish run. Built once at startup and read-only afterwards,
/// except for the ffmpeg downgrade of `optimize_file`.
#[derive(Debug, Clone, Serialize)]
pub struct PublishConfig {
    /// Directory holding the media, descriptions and thumbnails.
    pub file_directory: PathBuf,
    /// Publisher channel, including the leading `@`.
    pub channel_name: String,
    pub port: u16,
    /// Amount backing each claim, as decimal text.
    pub bid: String,
    /// Download fee in LBC; `None` or zero publishes for free.
    pub fee_amount: Option<String>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub license: Option<License>,
    pub license_url: Option<String>,
    /// Publish the `{base}_fixed.{ext}` transcode instead of the original file.
    pub optimize_file: bool,
    pub request_timeout: Option<Duration>,
    /// Pause between two consecutive publishes.
    pub publish_delay: Duration,
    pub thumbnail_endpoint: String,
}

impl PublishConfig {
    pub fn new(file_directory: impl Into<PathBuf>, channel_name: impl Into<String>) -> Self {
        Self {
            file_directory: file_directory.into(),
            channel_name: channel_name.into(),
            port: DEFAULT_PORT,
            bid: DEFAULT_BID.to_string(),
            fee_amount: None,
            tags: Vec::new(),
            languages: vec![DEFAULT_LANGUAGE.to_string()],
            license: None,
            license_url: None,
            optimize_file: false,
            request_timeout: None,
            publish_delay: DEFAULT_PUBLISH_DELAY,
            thumbnail_endpoint: DEFAULT_THUMBNAIL_ENDPOINT.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), PublishError> {
        let is_other = self.license == Some(License::Other);
        if is_other != self.license_url.is_some() {
            return Err(PublishError::Config(
                "--license-url should be specified if and only if --license='Other'".to_string(),
            ));
        }

        if self.languages.is_empty() {
            return Err(PublishError::Config(
                "at least one language is required".to_string(),
            ));
        }
        if let Some(unknown) = self.languages.iter().find(|l| !is_known_language(l)) {
            return Err(PublishError::Config(format!(
                "'{unknown}' is not a recognised RFC 5646 language tag"
            )));
        }

        parse_amount("bid", &self.bid)?;
        if let Some(fee) = &self.fee_amount {
            parse_amount("fee amount", fee)?;
        }

        Ok(())
    }

    pub fn daemon_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub fn charges_fee(&self) -> bool {
        self.fee_amount
            .as_deref()
            .and_then(|fee| fee.trim().parse::<f64>().ok())
            .is_some_and(|fee| fee != 0.0)
    }

    /// English names of the configured languages; unknown tags are kept as given.
    pub fn language_names(&self) -> Vec<&str> {
        self.languages
            .iter()
            .map(|tag| language_name(tag).unwrap_or(tag.as_str()))
            .collect()
    }

    pub fn trace_loaded(&self) {
        info!(
            file_directory = %self.file_directory.display(),
            channel_name = %self.channel_name,
            port = self.port,
            bid = %self.bid,
            fee_amount = self.fee_amount.as_deref().unwrap_or("0"),
            languages = ?self.language_names(),
            optimize_file = self.optimize_file,
            "Loaded publish config"
        );
        debug!(?self, "Publish config loaded (full debug)");
    }
}

fn parse_amount(label: &str, raw: &str) -> Result<f64, PublishError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(PublishError::Config(format!(
            "{label} '{raw}' is not a non-negative decimal amount"
        ))),
    }
}
