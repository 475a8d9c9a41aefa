//! Reader for the OFX 1.x tag-soup dialect.
//!
//! A document is a `NAME:VALUE` header block followed by an SGML-like body
//! in which closing tags of value elements are optional:
//!
//! ```text
//! OFXHEADER:100
//! DATA:OFXSGML
//! ENCODING:USASCII
//! CHARSET:1252
//!
//! <OFX>
//!   <SIGNONMSGSRSV1><SONRS>
//!     <STATUS><CODE>0<SEVERITY>INFO</STATUS>
//! ...
//! ```
//!
//! [`parse`] returns `Ok(None)` for input that is not in this dialect so
//! that the caller can fall back to the XML reader.

pub mod builder;
pub mod error;
pub mod header;
pub mod tokenizer;
pub mod tree;
pub mod version;

pub use builder::TreeBuilder;
pub use error::SgmlError;
pub use header::{Header, HeaderScan, scan_header};
pub use tree::{NodeId, SgmlNode, SgmlTree};
pub use version::Version;

use ofxtree_element::TagComparer;

/// A successfully parsed tag-soup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgmlDocument {
    pub header: Header,
    pub tree: SgmlTree,
}

/// Parses `bytes` as a tag-soup document, matching closing tags case-insensitively.
pub fn parse(bytes: &[u8]) -> Result<Option<SgmlDocument>, SgmlError> {
    parse_with_comparer(bytes, TagComparer::default())
}

/// Parses `bytes` as a tag-soup document.
///
/// Returns `Ok(None)` when the header is missing or not `OFXHEADER:100`,
/// and when the body holds no element at all.
pub fn parse_with_comparer(
    bytes: &[u8],
    comparer: TagComparer,
) -> Result<Option<SgmlDocument>, SgmlError> {
    let lines = split_lines(bytes);
    let (header, lines_consumed) = match scan_header(&lines)? {
        HeaderScan::TagSoup {
            header,
            lines_consumed,
        } => (header, lines_consumed),
        HeaderScan::NotTagSoup => return Ok(None),
    };

    let decoder = ofxtree_encoding::resolve(&header.encoding, &header.charset);
    let mut builder = TreeBuilder::with_comparer(comparer);
    for (offset, raw) in lines[lines_consumed..].iter().enumerate() {
        let line_number = lines_consumed + offset + 1;
        builder.feed_line(line_number, &decoder.decode(raw))?;
    }

    match builder.finish() {
        Some(tree) => {
            log::debug!("Built tag-soup tree with {} elements", tree.len());
            Ok(Some(SgmlDocument { header, tree }))
        }
        None => {
            log::debug!("Tag-soup body produced no elements");
            Ok(None)
        }
    }
}

/// Splits on `\n`, `\r\n` and lone `\r`, without the terminators.
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    lines
}
