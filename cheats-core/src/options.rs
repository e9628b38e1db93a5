use serde::Deserialize;

/// Longest raw input line the parser accepts, not counting the line terminator
pub const DEFAULT_MAX_LINE_LENGTH: usize = 511;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ParserOptions {
    pub max_line_length: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct WriterOptions {
    /// Emit codes with a non-zero tag in their three-word form so the tag survives a round-trip
    pub emit_tags: bool,
}
