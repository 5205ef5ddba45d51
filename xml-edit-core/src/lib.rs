//! Generic XML tree primitives for assembling NETCONF edit-config payloads.

pub mod namespace;
pub mod parser;
pub mod tree;
pub mod writer;

pub use namespace::{remove_namespaces, strip_namespaces, NamespaceError};
pub use parser::{parse, parse_file, ParseError};
pub use tree::XmlNode;
pub use writer::{write, write_file, WriteError};
