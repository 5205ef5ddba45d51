//! Facts-side collaborators: reading the device's current flexible-port
//! configuration.

use std::path::PathBuf;

use thiserror::Error;
use xml_edit_core::{parse_file, strip_namespaces, ParseError, XmlNode};

use crate::model::FlexiblePort;

/// Errors raised while fetching or decoding flexible-port facts.
#[derive(Debug, Error)]
pub enum FactsError {
    #[error("failed to parse facts XML: {0}")]
    Parse(#[from] ParseError),
    /// A reported `<fp>` entry without a `<name>` child.
    #[error("flexible-port facts entry is missing a name")]
    MissingName,
}

/// Source of the device's current flexible-port configuration.
///
/// Implementations own the transport (or the lack of one); the pipeline only
/// asks for a snapshot. An empty result means nothing is configured.
pub trait FactsSource {
    fn fetch(&mut self) -> Result<Vec<FlexiblePort>, FactsError>;
}

/// Read flexible-port records out of a namespace-stripped `<fps>` subtree.
///
/// Unknown child elements are ignored; devices report more leaves than this
/// tool manages.
pub fn parse_fps_facts(fps: &XmlNode) -> Result<Vec<FlexiblePort>, FactsError> {
    let mut records = Vec::new();
    for fp in fps.get_children("fp") {
        let name = fp.get_text(&["name"]).ok_or(FactsError::MissingName)?;
        let mut record = FlexiblePort::new(name);
        record.logical_port = fp.get_text(&["logical-port"]).map(str::to_string);
        record.fd_name = fp.get_text(&["fd-name"]).map(str::to_string);
        record.normalize();
        records.push(record);
    }
    Ok(records)
}

/// Locate the `<fps>` element in a facts reply. Replies wrap the subtree in
/// envelopes such as `<data>` or `<config>` depending on how they were
/// captured.
pub fn find_fps(root: &XmlNode) -> Option<&XmlNode> {
    if root.tag == "fps" {
        return Some(root);
    }
    root.children.iter().find_map(find_fps)
}

/// File-backed facts source: parses a saved get-config reply.
#[derive(Debug, Clone)]
pub struct FileFacts {
    path: PathBuf,
}

impl FileFacts {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FactsSource for FileFacts {
    fn fetch(&mut self) -> Result<Vec<FlexiblePort>, FactsError> {
        let mut root = parse_file(&self.path)?;
        strip_namespaces(&mut root);
        match find_fps(&root) {
            Some(fps) => parse_fps_facts(fps),
            // No subtree means the device has no flexible ports configured.
            None => Ok(Vec::new()),
        }
    }
}
