//! Loading and dumping configuration snapshots as JSON or TOML.

use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, anyhow, bail};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// On-disk snapshot format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::from_str(ext).map_err(|_| anyhow!("Unsupported config file extension: {ext:?}"))
    }
}

/// Reads the snapshot at `path`; a missing or blank file is an empty config.
pub fn load_config(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let format = ConfigFormat::from_path(path)?;
    if !path.exists() {
        info!("{} does not exist, starting from an empty config", path.display());
        return Ok(Map::new());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content, format).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn parse_config(content: &str, format: ConfigFormat) -> anyhow::Result<Map<String, Value>> {
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => {
            let v: toml::Value = toml::from_str(content)?;
            serde_json::to_value(v)?
        }
    };
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("top level must be a table, found {other}"),
    }
}

/// Serializes `config` in the format matching `path`.
pub fn dump_config(path: &Path, config: Map<String, Value>) -> anyhow::Result<String> {
    format_config(config, ConfigFormat::from_path(path)?)
}

/// TOML has no null: null-valued keys are left out, which reads back as
/// "not set".
pub fn format_config(config: Map<String, Value>, format: ConfigFormat) -> anyhow::Result<String> {
    let mut value = Value::Object(config);
    let s = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&value)?,
        ConfigFormat::Toml => {
            strip_nulls(&mut value);
            toml::to_string_pretty(&value).context("config cannot be written as TOML")?
        }
    };
    Ok(s)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, v| {
                if v.is_null() {
                    debug!("dropping unset key {key}");
                    return false;
                }
                true
            });
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
