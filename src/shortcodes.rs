//! Shortcode definitions and the registry they are dispatched from.

use std::collections::BTreeMap;

use regex::Regex;

use crate::Error;
use crate::parser::block_parser::BlockParser;
use crate::parser::block_parser::state::{BlockState, ParentType};
use crate::token::Nesting;

/// An immutable shortcode definition.
///
/// Implementations are registered once at parser construction and dispatched
/// by exact type name. `mutate_state` owns all token emission for a matched
/// block; whatever it overrides in the shared state it must restore before
/// returning, on every path.
pub trait Shortcode: Send + Sync {
    /// Unique type name, matched against the open marker's `type` capture.
    fn kind(&self) -> &str;

    /// Accept or reject the raw parameter string before any scanning runs.
    fn validate_params(&self, _params: &str) -> bool {
        true
    }

    /// Emit tokens for the block spanning `[start_line, end_line]`,
    /// re-entering `host` for the nested body. Returns false if the
    /// parameters cannot be interpreted, in which case nothing may have
    /// been emitted or mutated.
    fn mutate_state(
        &self,
        host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        params: &str,
    ) -> bool;
}

/// Registry of shortcode definitions, keyed by unique type name.
#[derive(Default)]
pub struct ShortcodeRegistry {
    shortcodes: BTreeMap<String, Box<dyn Shortcode>>,
}

impl ShortcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in [`Admonition`] shortcode.
    pub fn with_defaults() -> Self {
        let mut shortcodes: BTreeMap<String, Box<dyn Shortcode>> = BTreeMap::new();
        shortcodes.insert("admonition".to_string(), Box::new(Admonition::new()));
        ShortcodeRegistry { shortcodes }
    }

    /// Add a definition; type names must be unique.
    pub fn register(&mut self, shortcode: Box<dyn Shortcode>) -> Result<(), Error> {
        let kind = shortcode.kind().to_string();
        if self.shortcodes.contains_key(&kind) {
            return Err(Error::DuplicateShortcode(kind));
        }
        self.shortcodes.insert(kind, shortcode);
        Ok(())
    }

    pub fn get(&self, kind: &str) -> Option<&dyn Shortcode> {
        self.shortcodes.get(kind).map(Box::as_ref)
    }
}

const ADMONITION_OPEN_MARKUP: &str = "{{< admonition ";
const ADMONITION_CLOSE_MARKUP: &str = "{{< /admonition >}}";
const ADMONITION_TITLE_CLASS: &str = "details-summary admonition-title";

/// The built-in admonition container: `{{< admonition note "Title" >}}`.
///
/// Parameters are a subtype word plus a quoted title; the subtype lands in
/// the container's `class` attribute.
pub struct Admonition {
    title: Regex,
}

impl Admonition {
    pub fn new() -> Self {
        Admonition {
            title: Regex::new(r#"(?<type>\w+) "(?<title>.*)""#).expect("title pattern is valid"),
        }
    }
}

impl Default for Admonition {
    fn default() -> Self {
        Self::new()
    }
}

impl Shortcode for Admonition {
    fn kind(&self) -> &str {
        "admonition"
    }

    fn mutate_state(
        &self,
        host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        params: &str,
    ) -> bool {
        // Reject before touching anything; a malformed title fails the
        // whole match attempt with no partial output.
        let Some(caps) = self.title.captures(params) else {
            return false;
        };
        let (Some(subtype), Some(title)) = (caps.name("type"), caps.name("title")) else {
            return false;
        };
        let subtype = subtype.as_str();
        let title = title.as_str();

        let old_parent = state.parent_type;
        let old_line_max = state.line_max;

        state.parent_type = ParentType::Shortcode;
        // Keeps lazy continuations in the body from ever reading past the
        // closing marker.
        state.line_max = end_line;

        let class = format!("details admonition {subtype}");

        let token = state.push("container_open", "div", Nesting::Open);
        token.markup = ADMONITION_OPEN_MARKUP.to_string();
        token.block = true;
        token.info = subtype.to_string();
        token.attr_push("class", &class);
        token.map = Some((start_line, end_line));

        let token = state.push("title_open", "div", Nesting::Open);
        token.markup = ADMONITION_OPEN_MARKUP.to_string();
        token.attr_push("class", ADMONITION_TITLE_CLASS);
        token.map = Some((start_line, end_line));

        let token = state.push("inline", "", Nesting::SelfContained);
        token.content = title.to_string();
        token.map = Some((start_line, start_line + 1));

        let token = state.push("title_close", "div", Nesting::Close);
        token.markup = ADMONITION_CLOSE_MARKUP.to_string();

        host.tokenize(state, start_line + 1, end_line);

        let token = state.push("container_close", "div", Nesting::Close);
        token.markup = ADMONITION_CLOSE_MARKUP.to_string();
        token.block = true;
        token.attr_push("class", &class);

        state.parent_type = old_parent;
        state.line_max = old_line_max;
        // Past the closing marker, whether it was explicit or implied.
        state.line = end_line + 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;
    impl Shortcode for Dummy {
        fn kind(&self) -> &str {
            "dummy"
        }
        fn mutate_state(
            &self,
            _host: &BlockParser,
            _state: &mut BlockState,
            _start_line: usize,
            _end_line: usize,
            _params: &str,
        ) -> bool {
            true
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ShortcodeRegistry::new();
        registry.register(Box::new(Dummy)).unwrap();
        assert!(registry.get("dummy").is_some());
        assert!(registry.get("admonition").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = ShortcodeRegistry::with_defaults();
        let err = registry.register(Box::new(Admonition::new())).unwrap_err();
        assert!(matches!(err, Error::DuplicateShortcode(kind) if kind == "admonition"));
    }

    #[test]
    fn test_default_validator_accepts_anything() {
        assert!(Dummy.validate_params(""));
        assert!(Dummy.validate_params("anything at all"));
    }
}
