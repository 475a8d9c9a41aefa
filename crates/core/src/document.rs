use crate::error::DocumentError;
use ofxtree_element::{Element, TagComparer};
use ofxtree_sgml::{Header, SgmlNode, SgmlTree};
use ofxtree_xml::{XmlNode, XmlTree};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The physical syntax a document was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// OFX 1.x: header block plus SGML body with optional closing tags.
    TagSoup,
    /// OFX 2.x: well-formed XML.
    Xml,
}

/// Options for reading a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Matches closing tags to open elements in the tag-soup dialect.
    pub closing_tag_comparer: TagComparer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    TagSoup(SgmlTree),
    Xml(XmlTree),
}

/// A loaded OFX document. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: Option<Header>,
    body: Body,
}

impl Document {
    /// Reads the file at `path` and parses it. The file is closed before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::load_with(path, &LoadOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        log::debug!("Loading OFX document from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with(file, options)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, DocumentError> {
        Self::from_reader_with(reader, &LoadOptions::default())
    }

    pub fn from_reader_with(mut reader: impl Read, options: &LoadOptions) -> Result<Self, DocumentError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        drop(reader);
        Self::from_bytes_with(&bytes, options)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        Self::from_bytes_with(bytes, &LoadOptions::default())
    }

    /// Tries the tag-soup dialect first and falls back to XML when the input
    /// is not in that dialect. Grammar errors are returned, never retried.
    pub fn from_bytes_with(bytes: &[u8], options: &LoadOptions) -> Result<Self, DocumentError> {
        if let Some(doc) = ofxtree_sgml::parse_with_comparer(bytes, options.closing_tag_comparer)? {
            log::debug!("Read document as tag-soup (VERSION {})", doc.header.version);
            return Ok(Document {
                header: Some(doc.header),
                body: Body::TagSoup(doc.tree),
            });
        }

        log::debug!("Not a tag-soup document; parsing as XML");
        let tree = XmlTree::from_bytes(bytes)?;
        Ok(Document {
            header: None,
            body: Body::Xml(tree),
        })
    }

    pub fn dialect(&self) -> Dialect {
        match self.body {
            Body::TagSoup(_) => Dialect::TagSoup,
            Body::Xml(_) => Dialect::Xml,
        }
    }

    /// The header block. Only tag-soup documents have one.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// The top-level element, normally `OFX`.
    pub fn root(&self) -> AnyElement<'_> {
        match &self.body {
            Body::TagSoup(tree) => AnyElement::TagSoup(tree.root()),
            Body::Xml(tree) => AnyElement::Xml(tree.root()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Body::TagSoup(tree) => tree.fmt(f),
            Body::Xml(tree) => tree.fmt(f),
        }
    }
}

/// An element of either dialect's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyElement<'a> {
    TagSoup(SgmlNode<'a>),
    Xml(XmlNode<'a>),
}

impl<'a> Element<'a> for AnyElement<'a> {
    fn name(&self) -> &'a str {
        match self {
            AnyElement::TagSoup(node) => node.name(),
            AnyElement::Xml(node) => node.name(),
        }
    }

    fn value(&self) -> Option<&'a str> {
        match self {
            AnyElement::TagSoup(node) => node.value(),
            AnyElement::Xml(node) => node.value(),
        }
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match self {
            AnyElement::TagSoup(node) => Box::new(node.child_elements().map(AnyElement::TagSoup)),
            AnyElement::Xml(node) => Box::new(node.child_elements().map(AnyElement::Xml)),
        }
    }

    fn parent(&self) -> Option<Self> {
        match self {
            AnyElement::TagSoup(node) => node.parent().map(AnyElement::TagSoup),
            AnyElement::Xml(node) => node.parent().map(AnyElement::Xml),
        }
    }
}
