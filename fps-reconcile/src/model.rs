//! Flexible-port data model and want-config loading.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a want configuration.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read want config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse want config: {0}")]
    Toml(#[from] toml::de::Error),
    /// A `[[fp]]` entry with no usable name (index is zero-based).
    #[error("flexible-port entry {0} is missing a name")]
    MissingName(usize),
}

/// One flexible-port entry, in desired or reported configuration.
///
/// `name` identifies the entry; the optional fields reference a logical
/// port and a forwarding domain. Field names follow the device's wire
/// spelling (`logical-port`, `fd-name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexiblePort {
    /// Defaulted on deserialization so an omitted name surfaces as
    /// [`ModelError::MissingName`] rather than a field error.
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "logical-port",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logical_port: Option<String>,
    #[serde(rename = "fd-name", default, skip_serializing_if = "Option::is_none")]
    pub fd_name: Option<String>,
}

impl FlexiblePort {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logical_port: None,
            fd_name: None,
        }
    }

    /// Collapse present-but-empty optional fields to absent, so downstream
    /// XML generation never emits empty elements.
    pub fn normalize(&mut self) {
        for field in [&mut self.logical_port, &mut self.fd_name] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
    }
}

/// Reconciliation mode selecting how `want` and `have` combine.
///
/// Unknown mode strings are rejected at the clap/serde boundary, before any
/// XML generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Add or update the named entries; leave unrelated entries alone.
    Merged,
    /// Remove and re-add only the entries named in `want`.
    Replaced,
    /// Make the device's entry set exactly equal to `want`.
    Overridden,
    /// Remove the named entries, or everything if none are named.
    Deleted,
}

/// File shape of a want configuration: a list of `[[fp]]` tables.
#[derive(Debug, Default, Deserialize)]
pub struct WantConfig {
    #[serde(default, rename = "fp")]
    pub fps: Vec<FlexiblePort>,
}

/// Parse a want configuration from TOML text, normalizing and validating
/// every entry.
pub fn parse_want(raw: &str) -> Result<Vec<FlexiblePort>, ModelError> {
    let config: WantConfig = toml::from_str(raw)?;
    let mut fps = config.fps;
    for (index, fp) in fps.iter_mut().enumerate() {
        fp.normalize();
        if fp.name.is_empty() {
            return Err(ModelError::MissingName(index));
        }
    }
    Ok(fps)
}

/// Load a want configuration from a TOML file.
pub fn load_want(path: &Path) -> Result<Vec<FlexiblePort>, ModelError> {
    let raw = fs::read_to_string(path)?;
    parse_want(&raw)
}

/// Report whether two fact snapshots differ structurally.
///
/// Devices may report entries in any order, so comparison is keyed by name;
/// reordering alone is not a configuration change.
pub fn facts_differ(a: &[FlexiblePort], b: &[FlexiblePort]) -> bool {
    let mut left: Vec<&FlexiblePort> = a.iter().collect();
    let mut right: Vec<&FlexiblePort> = b.iter().collect();
    left.sort_by(|x, y| x.name.cmp(&y.name));
    right.sort_by(|x, y| x.name.cmp(&y.name));
    left != right
}
