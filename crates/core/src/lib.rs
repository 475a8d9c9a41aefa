//! # ofxtree-core
//!
//! Loads an OFX file in either dialect and exposes its root as an
//! [`Element`]:
//!
//! 1. If the file starts with an `OFXHEADER:100` header block, the tag-soup
//!    reader builds the tree. Grammar errors there are fatal.
//! 2. Otherwise, or when the tag-soup body holds no element, the bytes are
//!    parsed as well-formed XML.
//!
//! The resulting [`Document`] is immutable and can be shared across threads.

pub mod document;
pub mod error;

pub use document::{AnyElement, Dialect, Document, LoadOptions};
pub use error::DocumentError;

// Re-export the types callers need to work with a loaded document
pub use ofxtree_element::{Element, TagComparer};
pub use ofxtree_sgml::{Header, Version};
