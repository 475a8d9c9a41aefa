//! Defines the core abstraction for a navigable, read-only OFX element tree.
//!
//! Both the tag-soup tree and the well-formed XML tree implement [`Element`],
//! so mapping code is written once against this trait.

mod comparer;
pub mod tests;

pub use comparer::TagComparer;

use std::fmt::Debug;

/// The universal contract for a node in a parsed OFX document.
///
/// Implementations are cheap `Copy` handles into a tree owned elsewhere.
/// `'a` is the lifetime of that tree.
pub trait Element<'a>: Debug + Clone + Copy {
    /// The tag name. For namespaced XML this is the local part only.
    fn name(&self) -> &'a str;

    /// The scalar value of a leaf element, `None` for structural elements.
    fn value(&self) -> Option<&'a str>;

    /// All child elements in document order.
    fn child_elements(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The enclosing element, `None` for the root.
    fn parent(&self) -> Option<Self>;

    fn is_leaf(&self) -> bool {
        self.value().is_some()
    }

    /// The first child whose name matches `name` under `comparer`.
    fn child(&self, name: &str, comparer: &TagComparer) -> Option<Self> {
        self.child_elements()
            .find(|c| comparer.matches(c.name(), name))
    }

    /// All children named `name`, in document order.
    fn children<'n>(
        &self,
        name: &'n str,
        comparer: &'n TagComparer,
    ) -> Box<dyn Iterator<Item = Self> + 'n>
    where
        'a: 'n,
        Self: 'n,
    {
        Box::new(
            self.child_elements()
                .filter(move |c| comparer.matches(c.name(), name)),
        )
    }

    /// All children whose name matches any of `names`, in document order.
    ///
    /// Used for aggregates holding several mutually exclusive kinds, such as
    /// a position list mixing `POSSTOCK`, `POSDEBT` and `POSMF`.
    fn children_any<'n>(
        &self,
        names: &'n [&'n str],
        comparer: &'n TagComparer,
    ) -> Box<dyn Iterator<Item = Self> + 'n>
    where
        'a: 'n,
        Self: 'n,
    {
        Box::new(self.child_elements().filter(move |c| {
            let candidate = c.name();
            names.iter().any(|name| comparer.matches(candidate, name))
        }))
    }

    /// Depth-first search for every descendant named `name`.
    fn descendants_named(&self, name: &str, comparer: &TagComparer) -> Vec<Self> {
        let mut found = Vec::new();
        let mut stack: Vec<Self> = self.child_elements().collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if comparer.matches(node.name(), name) {
                found.push(node);
            }
            let mut children: Vec<Self> = node.child_elements().collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// Slash-joined names from the root down to this element, e.g. `OFX/SIGNONMSGSRSV1`.
    fn path(&self) -> String {
        let mut names = vec![self.name()];
        let mut current = self.parent();
        while let Some(node) = current {
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        names.join("/")
    }
}
