//! Arena storage for a parsed tag-soup document.

use ofxtree_element::Element;
use std::fmt;

/// Index of a node inside its [`SgmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    name: String,
    value: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An immutable tree of tag-soup elements.
///
/// Nodes own their children through the arena; parents are plain indices,
/// so there are no reference cycles. Two trees compare equal when they have
/// the same names, values and child order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgmlTree {
    nodes: Vec<NodeData>,
}

impl SgmlTree {
    pub(crate) fn with_root(name: &str) -> Self {
        SgmlTree {
            nodes: vec![NodeData {
                name: name.to_string(),
                value: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub(crate) fn push(&mut self, parent: NodeId, name: &str, value: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: name.to_string(),
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub const ROOT: NodeId = NodeId(0);

    pub fn root(&self) -> SgmlNode<'_> {
        self.node(Self::ROOT)
    }

    pub fn node(&self, id: NodeId) -> SgmlNode<'_> {
        SgmlNode { tree: self, id }
    }

    /// Number of elements, structural and leaf.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for SgmlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(Self::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            match &node.value {
                Some(value) => writeln!(f, "{:indent$}{} = {}", "", node.name, value, indent = depth * 2)?,
                None => writeln!(f, "{:indent$}{}", "", node.name, indent = depth * 2)?,
            }
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

/// A handle to one element of an [`SgmlTree`].
#[derive(Debug, Clone, Copy)]
pub struct SgmlNode<'a> {
    tree: &'a SgmlTree,
    id: NodeId,
}

impl<'a> SgmlNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }
}

impl<'a> PartialEq for SgmlNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<'a> Eq for SgmlNode<'a> {}

impl<'a> Element<'a> for SgmlNode<'a> {
    fn name(&self) -> &'a str {
        &self.data().name
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
                .map(move |&id| SgmlNode { tree, id }),
        )
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| SgmlNode {
            tree: self.tree,
            id,
        })
    }
}
