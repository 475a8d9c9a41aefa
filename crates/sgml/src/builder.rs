//! Builds an [`SgmlTree`] from tag fragments, resolving optional closing tags.
//!
//! The builder keeps two cursors instead of a single stack:
//!
//! - `current`: the open aggregate that new elements are appended to.
//! - `last_value`: the most recent leaf, whose closing tag may or may not follow.
//!
//! A closing tag first tries to close `current`, then `last_value`. Anything
//! else is a mismatch. This disambiguates `</NAME>` without lookahead.

use crate::error::SgmlError;
use crate::tokenizer::{Fragment, classify, decode_entities, fragments};
use crate::tree::{NodeId, SgmlTree};
use ofxtree_element::TagComparer;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Option<SgmlTree>,
    current: Option<NodeId>,
    last_value: Option<NodeId>,
    comparer: TagComparer,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `comparer` to match closing tags against open elements.
    pub fn with_comparer(comparer: TagComparer) -> Self {
        TreeBuilder {
            comparer,
            ..Self::default()
        }
    }

    /// Feeds one physical line. `line_number` is only used in errors.
    pub fn feed_line(&mut self, line_number: usize, line: &str) -> Result<(), SgmlError> {
        for fragment in fragments(line) {
            let comparer = self.comparer;
            let shape = classify(&fragment, |a, b| comparer.matches(a, b)).ok_or_else(|| {
                SgmlError::UnrecognizedFragment {
                    line: line_number,
                    fragment: fragment.to_string(),
                }
            })?;
            log::trace!("line {}: {:?}", line_number, shape);
            self.apply(line_number, shape)?;
        }
        Ok(())
    }

    fn apply(&mut self, line: usize, fragment: Fragment<'_>) -> Result<(), SgmlError> {
        match fragment {
            Fragment::Open(name) => self.open(line, name),
            Fragment::PartialValue { name, value } | Fragment::FullValue { name, value } => {
                let id = self.append(line, name, Some(decode_entities(value).into_owned()))?;
                // A full value tag is already closed.
                self.last_value = match fragment {
                    Fragment::FullValue { .. } => None,
                    _ => Some(id),
                };
                Ok(())
            }
            Fragment::Close(name) => self.close(line, name),
        }
    }

    fn open(&mut self, line: usize, name: &str) -> Result<(), SgmlError> {
        self.last_value = None;
        if self.tree.is_none() {
            self.tree = Some(SgmlTree::with_root(name));
            self.current = Some(SgmlTree::ROOT);
            return Ok(());
        }
        let id = self.append(line, name, None)?;
        self.current = Some(id);
        Ok(())
    }

    fn append(&mut self, line: usize, name: &str, value: Option<String>) -> Result<NodeId, SgmlError> {
        match (self.tree.as_mut(), self.current) {
            (Some(tree), Some(parent)) => Ok(tree.push(parent, name, value)),
            _ => Err(SgmlError::OutsideRoot {
                line,
                tag: name.to_string(),
            }),
        }
    }

    fn close(&mut self, line: usize, name: &str) -> Result<(), SgmlError> {
        let Some(tree) = self.tree.as_ref() else {
            return Err(SgmlError::MismatchedClosingTag {
                line,
                tag: name.to_string(),
                open: None,
                last_value: None,
            });
        };

        if let Some(current) = self.current
            && self.comparer.matches(tree.name_of(current), name)
        {
            self.current = tree.parent_of(current);
            self.last_value = None;
            return Ok(());
        }

        if let Some(last) = self.last_value
            && self.comparer.matches(tree.name_of(last), name)
        {
            self.last_value = None;
            return Ok(());
        }

        Err(SgmlError::MismatchedClosingTag {
            line,
            tag: name.to_string(),
            open: self.current.map(|id| tree.name_of(id).to_string()),
            last_value: self.last_value.map(|id| tree.name_of(id).to_string()),
        })
    }

    /// Returns the tree, or `None` when no element was ever opened.
    pub fn finish(self) -> Option<SgmlTree> {
        let tree = self.tree?;
        if let Some(open) = self.current {
            log::warn!(
                "Input ended with <{}> still open; closing it implicitly",
                tree.name_of(open)
            );
        }
        Some(tree)
    }
}
