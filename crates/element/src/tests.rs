// Test utilities - publicly available for integration testing in downstream crates
use super::*;

#[derive(Debug, Clone)]
struct MockNodeData {
    name: String,
    value: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An in-memory tree for exercising code written against [`Element`].
#[derive(Debug, Default)]
pub struct MockTree {
    nodes: Vec<MockNodeData>,
}

impl MockTree {
    /// Starts a tree with a single structural root.
    pub fn with_root(name: &str) -> Self {
        let mut tree = MockTree::default();
        tree.nodes.push(MockNodeData {
            name: name.to_string(),
            value: None,
            parent: None,
            children: Vec::new(),
        });
        tree
    }

    /// Appends a structural child under `parent` and returns its id.
    pub fn add_aggregate(&mut self, parent: usize, name: &str) -> usize {
        self.push(parent, name, None)
    }

    /// Appends a leaf child under `parent` and returns its id.
    pub fn add_value(&mut self, parent: usize, name: &str, value: &str) -> usize {
        self.push(parent, name, Some(value.to_string()))
    }

    fn push(&mut self, parent: usize, name: &str, value: Option<String>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(MockNodeData {
            name: name.to_string(),
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn root(&self) -> MockNode<'_> {
        MockNode { id: 0, tree: self }
    }

    pub fn node(&self, id: usize) -> MockNode<'_> {
        MockNode { id, tree: self }
    }
}

/// A handle to a node of a [`MockTree`].
#[derive(Debug, Clone, Copy)]
pub struct MockNode<'a> {
    pub id: usize,
    pub tree: &'a MockTree,
}

impl<'a> PartialEq for MockNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}
impl<'a> Eq for MockNode<'a> {}

impl<'a> Element<'a> for MockNode<'a> {
    fn name(&self) -> &'a str {
        &self.tree.nodes[self.id].name
    }

    fn value(&self) -> Option<&'a str> {
        self.tree.nodes[self.id].value.as_deref()
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let tree = self.tree; // Re-borrow to help the lifetime checker
        Box::new(
            tree.nodes[self.id]
                .children
                .iter()
                .map(move |&id| MockNode { id, tree }),
        )
    }

    fn parent(&self) -> Option<Self> {
        self.tree.nodes[self.id].parent.map(|id| MockNode {
            id,
            tree: self.tree,
        })
    }
}

/// Creates a small statement-shaped tree:
/// ```text
/// OFX                          (0)
///   STMTRS                     (1)
///     CURDEF = USD             (2)
///     BANKTRANLIST             (3)
///       STMTTRN                (4)
///         TRNAMT = -10.00      (5)
///       STMTTRN                (6)
///         TRNAMT = 25.50       (7)
///     INVPOSLIST               (8)
///       POSSTOCK               (9)
///       POSMF                  (10)
///       POSDEBT                (11)
///       POSOPT                 (12)
/// ```
pub fn create_test_tree() -> MockTree {
    let mut tree = MockTree::with_root("OFX");
    let stmtrs = tree.add_aggregate(0, "STMTRS");
    tree.add_value(stmtrs, "CURDEF", "USD");
    let list = tree.add_aggregate(stmtrs, "BANKTRANLIST");
    let first = tree.add_aggregate(list, "STMTTRN");
    tree.add_value(first, "TRNAMT", "-10.00");
    let second = tree.add_aggregate(list, "STMTTRN");
    tree.add_value(second, "TRNAMT", "25.50");
    let positions = tree.add_aggregate(stmtrs, "INVPOSLIST");
    tree.add_aggregate(positions, "POSSTOCK");
    tree.add_aggregate(positions, "POSMF");
    tree.add_aggregate(positions, "POSDEBT");
    tree.add_aggregate(positions, "POSOPT");
    tree
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_child_lookup_uses_comparer() {
        let tree = create_test_tree();
        let root = tree.root();
        let insensitive = TagComparer::default();

        assert_eq!(root.child("stmtrs", &insensitive).map(|n| n.id), Some(1));
        assert!(root.child("stmtrs", &TagComparer::Ordinal).is_none());
        assert!(root.child("NOPE", &insensitive).is_none());
    }

    #[test]
    fn test_child_takes_first_duplicate() {
        let tree = create_test_tree();
        let list = tree.node(3);
        let first = list.child("STMTTRN", &TagComparer::default()).unwrap();
        assert_eq!(first.id, 4);
    }

    #[test]
    fn test_children_in_document_order() {
        let tree = create_test_tree();
        let comparer = TagComparer::default();
        let amounts: Vec<_> = tree
            .node(3)
            .children("stmttrn", &comparer)
            .filter_map(|trn| trn.child("TRNAMT", &comparer))
            .filter_map(|amt| amt.value())
            .collect();
        assert_eq!(amounts, vec!["-10.00", "25.50"]);
    }

    #[test]
    fn test_children_any_keeps_document_order() {
        let tree = create_test_tree();
        let comparer = TagComparer::default();
        let kinds: Vec<_> = tree
            .node(8)
            .children_any(&["POSMF", "POSSTOCK", "POSOPT"], &comparer)
            .map(|n| n.name())
            .collect();
        assert_eq!(kinds, vec!["POSSTOCK", "POSMF", "POSOPT"]);
    }

    #[test]
    fn test_value_and_leaf() {
        let tree = create_test_tree();
        assert_eq!(tree.node(2).value(), Some("USD"));
        assert!(tree.node(2).is_leaf());
        assert_eq!(tree.node(1).value(), None);
        assert!(!tree.node(1).is_leaf());
    }

    #[test]
    fn test_path_and_parent() {
        let tree = create_test_tree();
        assert_eq!(tree.node(5).path(), "OFX/STMTRS/BANKTRANLIST/STMTTRN/TRNAMT");
        assert_eq!(tree.root().path(), "OFX");
        assert_eq!(tree.node(5).parent(), Some(tree.node(4)));
        assert_eq!(tree.root().parent(), None);
    }

    #[test]
    fn test_descendants_named() {
        let tree = create_test_tree();
        let found: Vec<_> = tree
            .root()
            .descendants_named("TRNAMT", &TagComparer::default())
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(found, vec![5, 7]);
    }
}
