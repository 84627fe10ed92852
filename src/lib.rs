//! Line-oriented Markdown block tokenizer with pluggable Hugo-style
//! shortcode containers.
//!
//! The tokenizer drives an ordered chain of block rules over a line-indexed
//! source buffer, first match wins. The flagship rule recognizes shortcode
//! containers,
//!
//! ```text
//! {{< admonition note "Example Sentence" >}}
//!
//! Katie and her new boyfriend are so cute, always going around hand in hand.
//!
//! {{< /admonition >}}
//! ```
//!
//! and emits a balanced token subtree whose container carries a
//! `class="details admonition note"` attribute. The body between the
//! markers is fed back through the tokenizer, so nested containers, fences
//! and paragraphs all work without special cases. A block with no closing
//! marker closes implicitly at the end of its enclosing scope.
//!
//! # Examples
//!
//! ```rust
//! use shortmark::parse;
//!
//! let input = "{{< admonition note \"Example\" >}}\nbody text\n{{< /admonition >}}";
//! let tokens = parse(input);
//! assert_eq!(tokens[0].kind, "container_open");
//! assert_eq!(tokens[0].attr_get("class"), Some("details admonition note"));
//! ```
//!
//! Custom marker patterns and additional shortcode types go through
//! [`Options`] and [`ShortcodeRegistry`]; see [`Parser::new`].

pub mod config;
pub mod parser;
pub mod renderer;
pub mod shortcodes;
pub mod token;

pub use config::Options;
pub use parser::Parser;
pub use renderer::Renderer;
pub use shortcodes::{Admonition, Shortcode, ShortcodeRegistry};
pub use token::{Nesting, Token};

/// Errors raised while wiring up a [`Parser`]. A running parse never fails:
/// a rule that does not match is a recoverable condition handled by falling
/// through to the next rule.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("shortcode `{0}` is already registered")]
    DuplicateShortcode(String),
    #[error("no block rule named `{0}` to insert before")]
    UnknownRule(String),
    #[error("invalid {which}")]
    Pattern {
        which: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("{which} is missing the named capture `{name}`")]
    MissingCapture {
        which: &'static str,
        name: &'static str,
    },
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tokenize a document with the default options and the built-in
/// shortcode set.
pub fn parse(input: &str) -> Vec<Token> {
    default_parser().parse(input)
}

/// Tokenize and render a document to HTML with the default options and the
/// built-in shortcode set.
pub fn render(input: &str) -> String {
    default_parser().render(input)
}

fn default_parser() -> Parser {
    Parser::new(Options::default(), ShortcodeRegistry::with_defaults())
        .expect("default configuration is valid")
}
