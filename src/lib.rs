//! Reads OFX financial documents into a navigable element tree.
//!
//! [`Document`] detects the dialect of its input. OFX 1.x files (a colon
//! header block followed by SGML tag soup) and OFX 2.x files (plain XML) both
//! come back as a tree of [`Element`]s, and [`FieldReader`] turns leaf values
//! into strings, numbers and timestamps.
//!
//! ```no_run
//! use ofxtree::{Document, ExtractConfig, FieldReader, TagComparer, Element};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::load("statement.ofx")?;
//! let config = ExtractConfig::default();
//! let comparer = TagComparer::default();
//! for txn in doc.root().descendants_named("STMTTRN", &comparer) {
//!     let amount = txn.required_decimal("TRNAMT", &config)?;
//!     let posted = txn.required_timestamp("DTPOSTED", &config)?;
//!     log::info!("{} {}", posted, amount);
//! }
//! # Ok(())
//! # }
//! ```

pub use ofxtree_core as core;
pub use ofxtree_element as element;
pub use ofxtree_encoding as encoding;
pub use ofxtree_extract as extract;
pub use ofxtree_sgml as sgml;
pub use ofxtree_xml as xml;

pub use ofxtree_core::{AnyElement, Dialect, Document, DocumentError, LoadOptions};
pub use ofxtree_element::{Element, TagComparer};
pub use ofxtree_extract::{ExtractConfig, FieldError, FieldReader, ScalarKind};
pub use ofxtree_sgml::{Header, Version};
