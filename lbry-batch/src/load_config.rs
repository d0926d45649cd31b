/// `load_config` module: reads the optional YAML defaults file.
///
/// Every key is optional. Values given on the command line win over the
/// file, and the file wins over the built-in defaults. Amounts may be written
/// as YAML numbers or strings; both end up as decimal text.
///
/// ```yaml
/// port: 5279
/// bid: 0.01
/// tags: [music, live]
/// languages: [en, fr]
/// license: Public Domain
/// delay_secs: 15
/// ```
use anyhow::Result;
use lbry_batch_core::config::License;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PublishDefaults {
    pub port: Option<u32>,
    #[serde(default, deserialize_with = "amount")]
    pub bid: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub fee_amount: Option<String>,
    pub tags: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub license: Option<License>,
    pub license_url: Option<String>,
    pub optimize_file: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub delay_secs: Option<u64>,
    pub thumbnail_endpoint: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_yaml::Number),
}

fn amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawAmount> = Option::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
    }))
}

/// Loads the YAML defaults file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PublishDefaults> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    if config_content.trim().is_empty() {
        return Ok(PublishDefaults::default());
    }

    match serde_yaml::from_str(&config_content) {
        Ok(defaults) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            Ok(defaults)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}
