use ofxtree_element::TagComparer;

/// Options threaded through every field lookup.
#[derive(Debug, Clone, Copy)]
pub struct ExtractConfig {
    /// Strip surrounding whitespace from string values.
    pub trim_values: bool,
    /// How requested field names are matched against tag names.
    pub tag_comparer: TagComparer,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            trim_values: true,
            tag_comparer: TagComparer::CaseInsensitive,
        }
    }
}

impl ExtractConfig {
    pub fn with_trim_values(mut self, trim_values: bool) -> Self {
        self.trim_values = trim_values;
        self
    }

    pub fn with_tag_comparer(mut self, tag_comparer: TagComparer) -> Self {
        self.tag_comparer = tag_comparer;
        self
    }
}
