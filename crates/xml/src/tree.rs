// XML datasource implementation using roxmltree
use crate::decode::decode_document;
use crate::error::XmlError;
use ofxtree_element::Element;
use roxmltree::{Node, ParsingOptions};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct XmlNodeData {
    local_name: String,
    namespace: Option<String>,
    value: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Owned copy of the element structure of a well-formed document.
///
/// Only elements are kept. An element without element children becomes a
/// leaf whose value is its text content; an element that has neither
/// element children nor text is structural, matching how an empty
/// `<A></A>` reads in the tag-soup dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTree {
    nodes: Vec<XmlNodeData>,
}

impl XmlTree {
    /// Parses decoded XML text.
    pub fn parse(text: &str) -> Result<Self, XmlError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        let root = doc.root_element();

        let mut tree = XmlTree { nodes: Vec::new() };
        let mut pending = vec![(root, None)];
        while let Some((node, parent)) = pending.pop() {
            let id = tree.push(node, parent);
            let elements: Vec<_> = node.children().filter(|c| c.is_element()).collect();
            pending.extend(elements.into_iter().rev().map(|child| (child, Some(id))));
        }
        log::debug!("Built XML tree with {} elements", tree.nodes.len());
        Ok(tree)
    }

    /// Decodes raw bytes (BOM, then declared encoding, then UTF-8) and parses them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, XmlError> {
        Self::parse(&decode_document(bytes))
    }

    fn push(&mut self, node: Node<'_, '_>, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        let tag = node.tag_name();
        let value = if node.children().any(|c| c.is_element()) {
            None
        } else {
            let text: String = node
                .children()
                .filter(|c| c.is_text())
                .filter_map(|c| c.text())
                .collect();
            (!text.is_empty()).then_some(text)
        };
        self.nodes.push(XmlNodeData {
            local_name: tag.name().to_string(),
            namespace: tag.namespace().map(str::to_string),
            value,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    pub fn root(&self) -> XmlNode<'_> {
        XmlNode { tree: self, id: 0 }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for XmlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(0usize, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            match &node.value {
                Some(value) => writeln!(f, "{:indent$}{} = {}", "", node.local_name, value, indent = depth * 2)?,
                None => writeln!(f, "{:indent$}{}", "", node.local_name, indent = depth * 2)?,
            }
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

/// A handle to one element of an [`XmlTree`].
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a> {
    tree: &'a XmlTree,
    id: usize,
}

impl<'a> XmlNode<'a> {
    /// The namespace URI the element was declared in, if any.
    pub fn namespace(&self) -> Option<&'a str> {
        self.data().namespace.as_deref()
    }

    fn data(&self) -> &'a XmlNodeData {
        &self.tree.nodes[self.id]
    }
}

impl<'a> PartialEq for XmlNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<'a> Eq for XmlNode<'a> {}

impl<'a> Element<'a> for XmlNode<'a> {
    fn name(&self) -> &'a str {
        &self.data().local_name
    }

    fn value(&self) -> Option<&'a str> {
        self.data().value.as_deref()
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let tree = self.tree;
        Box::new(
            self.data()
                .children
                .iter()
                .map(move |&id| XmlNode { tree, id }),
        )
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| XmlNode {
            tree: self.tree,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofxtree_element::TagComparer;

    const STATEMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<?OFX OFXHEADER="200" VERSION="211" SECURITY="NONE" OLDFILEUID="NONE" NEWFILEUID="NONE"?>
<OFX>
  <SIGNONMSGSRSV1>
    <SONRS>
      <STATUS><CODE>0</CODE><SEVERITY>INFO</SEVERITY></STATUS>
      <DTSERVER>20240105120000.000[-5:EST]</DTSERVER>
      <LANGUAGE>ENG</LANGUAGE>
    </SONRS>
  </SIGNONMSGSRSV1>
</OFX>"#;

    #[test]
    fn test_structure_and_values() {
        let tree = XmlTree::parse(STATEMENT).unwrap();
        let comparer = TagComparer::default();
        let sonrs = tree
            .root()
            .child("signonmsgsrsv1", &comparer)
            .and_then(|n| n.child("sonrs", &comparer))
            .unwrap();
        assert_eq!(sonrs.value(), None);
        assert_eq!(
            sonrs
                .child("STATUS", &comparer)
                .and_then(|n| n.child("CODE", &comparer))
                .and_then(|n| n.value()),
            Some("0")
        );
        assert_eq!(sonrs.path(), "OFX/SIGNONMSGSRSV1/SONRS");
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn test_namespaces_are_ignored_for_lookup() {
        let xml = r#"<ofx:OFX xmlns:ofx="http://ofx.net/types/2003/04"><ofx:CODE>0</ofx:CODE></ofx:OFX>"#;
        let tree = XmlTree::parse(xml).unwrap();
        let code = tree.root().child("CODE", &TagComparer::Ordinal).unwrap();
        assert_eq!(tree.root().name(), "OFX");
        assert_eq!(code.value(), Some("0"));
        assert_eq!(code.namespace(), Some("http://ofx.net/types/2003/04"));
    }

    #[test]
    fn test_empty_element_is_structural() {
        let tree = XmlTree::parse("<A><B/><C></C><D> </D></A>").unwrap();
        let values: Vec<_> = tree.root().child_elements().map(|n| n.value()).collect();
        assert_eq!(values, vec![None, None, Some(" ")]);
    }

    #[test]
    fn test_entities_and_cdata() {
        let tree = XmlTree::parse("<A><NAME>AT&amp;T</NAME><MEMO><![CDATA[x < y]]></MEMO></A>").unwrap();
        let values: Vec<_> = tree.root().child_elements().map(|n| n.value()).collect();
        assert_eq!(values, vec![Some("AT&T"), Some("x < y")]);
    }

    #[test]
    fn test_display_outline() {
        let tree = XmlTree::parse("<A><B>1</B><C><D>2</D></C></A>").unwrap();
        assert_eq!(tree.to_string(), "A\n  B = 1\n  C\n    D = 2\n");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(matches!(
            XmlTree::parse("<A><B>1</A>"),
            Err(XmlError::Roxmltree(_))
        ));
        assert!(XmlTree::from_bytes(b"<OFX><CODE>0<SEVERITY>INFO</OFX>").is_err());
    }
}
