//! Namespace stripping for edit-config payload normalization.
//!
//! NETCONF edit fragments are often assembled from sources that carry
//! namespace prefixes and `xmlns` declarations. Devices that key on local
//! names want a prefix-free document. Because [`XmlNode`] is an owned tree,
//! stripping is a single in-place pass; no serialize/re-parse round trip is
//! needed.

use thiserror::Error;

use crate::parser::{parse, ParseError};
use crate::tree::XmlNode;
use crate::writer::{write, WriteError};

/// Errors that can occur while stripping namespaces from serialized XML.
#[derive(Debug, Error)]
pub enum NamespaceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Strip namespace prefixes and declarations from a tree, in place.
///
/// Element tags and attribute names lose their `prefix:` part; `xmlns` and
/// `xmlns:*` attributes are dropped entirely. Applies recursively.
pub fn strip_namespaces(node: &mut XmlNode) {
    node.tag = local_name(&node.tag).to_string();

    let attributes = std::mem::take(&mut node.attributes);
    for (key, value) in attributes {
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        node.attributes.insert(local_name(&key).to_string(), value);
    }

    for child in &mut node.children {
        strip_namespaces(child);
    }
}

/// Strip namespaces from an already-serialized document.
pub fn remove_namespaces(xml: &[u8]) -> Result<Vec<u8>, NamespaceError> {
    let mut root = parse(xml)?;
    strip_namespaces(&mut root);
    Ok(write(&root)?)
}

fn local_name(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}
