use std::fmt;

/// Decides whether a tag name found in a document matches a requested name.
///
/// Lookups thread a comparer through every call so that callers choose the
/// matching policy; the stored names are never normalized.
#[derive(Clone, Copy, Default)]
pub enum TagComparer {
    /// Unicode case-insensitive comparison.
    #[default]
    CaseInsensitive,
    /// Case-insensitive for ASCII letters only.
    AsciiCaseInsensitive,
    /// Exact, byte-for-byte comparison.
    Ordinal,
    /// A caller-supplied predicate receiving `(found, requested)`.
    Custom(fn(&str, &str) -> bool),
}

impl TagComparer {
    pub fn matches(&self, found: &str, requested: &str) -> bool {
        match self {
            TagComparer::CaseInsensitive => {
                found.eq_ignore_ascii_case(requested)
                    || found
                        .chars()
                        .flat_map(char::to_lowercase)
                        .eq(requested.chars().flat_map(char::to_lowercase))
            }
            TagComparer::AsciiCaseInsensitive => found.eq_ignore_ascii_case(requested),
            TagComparer::Ordinal => found == requested,
            TagComparer::Custom(predicate) => predicate(found, requested),
        }
    }
}

impl fmt::Debug for TagComparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagComparer::CaseInsensitive => f.write_str("CaseInsensitive"),
            TagComparer::AsciiCaseInsensitive => f.write_str("AsciiCaseInsensitive"),
            TagComparer::Ordinal => f.write_str("Ordinal"),
            TagComparer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
