//! Assembly of reconciliation fragments into one serialized payload.

use thiserror::Error;
use xml_edit_core::{strip_namespaces, write, WriteError, XmlNode};

/// Errors raised while serializing the assembled payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to serialize fps payload: {0}")]
    Write(#[from] WriteError),
}

/// Gather edit fragments under a single `<fps>` root and serialize it.
///
/// Fragments may carry namespace prefixes depending on how they were built,
/// so the assembled tree is normalized to local names before serialization.
/// The output embeds directly into a `<config>` envelope.
pub fn build_payload(fragments: Vec<XmlNode>) -> Result<Vec<u8>, PayloadError> {
    let mut root = XmlNode::new("fps");
    root.children.extend(fragments);
    strip_namespaces(&mut root);
    Ok(write(&root)?)
}
