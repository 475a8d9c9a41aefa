//! Reader for the well-formed XML dialect (OFX 2.x).
//!
//! roxmltree does the parsing; the element structure is then copied into an
//! owned [`XmlTree`] so a document can outlive the text it was read from.

mod decode;
pub mod error;
mod tree;

pub use decode::decode_document;
pub use error::XmlError;
pub use tree::{XmlNode, XmlTree};
