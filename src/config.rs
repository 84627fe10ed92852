//! Tokenizer options.

use serde::Deserialize;

/// Default opening-marker pattern: `{{< type params >}}`, anchored to
/// end-of-line, capturing `type` and `params`.
pub const DEFAULT_OPEN_TAG_PATTERN: &str = r"\{\{< (?<type>\w+) (?<params>.*?) ?>\}\}$";

/// Default closing-marker pattern: `{{< /type >}}`, anchored to
/// end-of-line, capturing `type`.
pub const DEFAULT_CLOSE_TAG_PATTERN: &str = r"\{\{< /(?<type>\w+) >\}\}$";

/// Options controlling the block tokenizer.
///
/// Deserializable so embedders can read it from whatever configuration
/// source they use; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pattern for the shortcode opening marker. Must define the named
    /// captures `type` and `params` and should stay anchored to end-of-line.
    pub open_tag_pattern: String,
    /// Pattern for the shortcode closing marker. Must define the named
    /// capture `type` and should stay anchored to end-of-line.
    pub close_tag_pattern: String,
    /// Maximum block-nesting depth. Content nested deeper is consumed
    /// without producing tokens, bounding recursion on adversarial input.
    pub max_nesting: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            open_tag_pattern: DEFAULT_OPEN_TAG_PATTERN.to_string(),
            close_tag_pattern: DEFAULT_CLOSE_TAG_PATTERN.to_string(),
            max_nesting: 20,
        }
    }
}
