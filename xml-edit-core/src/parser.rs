use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

use crate::tree::XmlNode;

/// Errors that can occur while parsing XML into an [`XmlNode`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input XML could not be decoded or tokenized.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Input bytes were not valid UTF-8 for tag/attribute/text extraction.
    #[error("invalid UTF-8 in XML input: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to decode a text entity.
    #[error("failed to decode XML text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    /// Failed to read the input file.
    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
    /// Structural issue in the XML document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Parse XML bytes into an [`XmlNode`] tree.
pub fn parse(xml: &[u8]) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let node = element(&e, &reader)?;
                stack.push(node);
            }
            Event::Empty(e) => {
                let node = element(&e, &reader)?;
                place(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    ParseError::Malformed("closing tag without matching open tag".to_string())
                })?;
                place(node, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                if let Some(open) = stack.last_mut() {
                    append_text(open, &e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(open) = stack.last_mut() {
                    append_text(open, std::str::from_utf8(e.as_ref())?);
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ParseError::Malformed(
            "unclosed element(s) at end of document".to_string(),
        ));
    }

    root.ok_or_else(|| ParseError::Malformed("no root element found".to_string()))
}

/// Parse an XML file into an [`XmlNode`] tree.
pub fn parse_file(path: &Path) -> Result<XmlNode, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Attach a completed node to the open element above it, or install it as
/// the document root.
fn place(
    node: XmlNode,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::Malformed(
            "multiple top-level elements found".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn append_text(node: &mut XmlNode, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    match &mut node.text {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_string()),
    }
}

fn element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlNode, ParseError> {
    let tag = qname_to_string(e.name())?;
    let mut node = XmlNode::new(tag);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = qname_to_string(attr.key)?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())?
            .into_owned();
        node.attributes.insert(key, value);
    }

    Ok(node)
}

fn qname_to_string(name: QName<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}
