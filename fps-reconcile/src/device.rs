//! Apply-side collaborators: handing an edit-config payload to a device.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while delivering an edit-config payload.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("failed to deliver edit-config payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameters of one edit-config RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConfigRequest {
    pub target: String,
    pub default_operation: String,
    pub format: String,
}

impl Default for EditConfigRequest {
    /// The pipeline always edits the running datastore with merge defaults;
    /// individual fragments opt into removal via their operation attribute.
    fn default() -> Self {
        Self {
            target: "running".to_string(),
            default_operation: "merge".to_string(),
            format: "xml".to_string(),
        }
    }
}

/// Sink for edit-config payloads.
///
/// Implementations own delivery and its failure semantics; the pipeline
/// performs no retry and adds no recovery of its own.
pub trait ConfigApplier {
    fn edit_config(&mut self, config: &[u8], request: &EditConfigRequest) -> Result<(), ApplyError>;
}

/// Wrap a feature payload in the `<config>` envelope edit-config expects.
pub fn wrap_config(payload: &[u8]) -> Vec<u8> {
    let mut doc = Vec::with_capacity(payload.len() + "<config></config>".len());
    doc.extend_from_slice(b"<config>");
    doc.extend_from_slice(payload);
    doc.extend_from_slice(b"</config>");
    doc
}

/// File-backed applier: writes the envelope where a transport would send it.
#[derive(Debug, Clone)]
pub struct FileApplier {
    path: PathBuf,
}

impl FileApplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigApplier for FileApplier {
    fn edit_config(
        &mut self,
        config: &[u8],
        _request: &EditConfigRequest,
    ) -> Result<(), ApplyError> {
        fs::write(&self.path, config)?;
        Ok(())
    }
}

/// Applier that discards the payload, for render-only flows.
#[derive(Debug, Clone, Default)]
pub struct DiscardApplier;

impl ConfigApplier for DiscardApplier {
    fn edit_config(
        &mut self,
        _config: &[u8],
        _request: &EditConfigRequest,
    ) -> Result<(), ApplyError> {
        Ok(())
    }
}
