pub mod fixtures;

use ofxtree::{AnyElement, Document, Element, TagComparer};
use std::io::Write;
use tempfile::NamedTempFile;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Writes `contents` to a temporary file that is removed when the handle drops.
pub fn write_temp_file(contents: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(file)
}

/// Follows a slash-separated path of child names down from the root,
/// e.g. `BANKMSGSRSV1/STMTTRNRS/STMTRS`.
pub fn find<'a>(doc: &'a Document, path: &str) -> Option<AnyElement<'a>> {
    let comparer = TagComparer::default();
    path.split('/')
        .try_fold(doc.root(), |node, name| node.child(name, &comparer))
}

/// The transactions of the fixture statement, in document order.
pub fn transactions(doc: &Document) -> Vec<AnyElement<'_>> {
    doc.root()
        .descendants_named("STMTTRN", &TagComparer::default())
}
