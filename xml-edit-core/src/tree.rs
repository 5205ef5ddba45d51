use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// An owned XML element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements, in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create a new XML node with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Append a child element, optionally carrying text content, and return
    /// a mutable handle to it so callers can keep building downward.
    pub fn add_child(&mut self, tag: impl Into<String>, text: Option<&str>) -> &mut XmlNode {
        let mut child = XmlNode::new(tag);
        child.text = text.map(str::to_string);
        self.children.push(child);
        let idx = self.children.len() - 1;
        &mut self.children[idx]
    }

    /// Set an attribute on this element, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Walk a nested child path and return terminal node text if found.
    pub fn get_text<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        current.text.as_deref()
    }
}

impl Display for XmlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }

        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }

        write!(f, ">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", text)?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
