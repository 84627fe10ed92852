//! Parser module containing the block tokenizer host and the top-level
//! [`Parser`] handle.

pub mod block_parser;

pub use block_parser::shortcode::ScanResult;
pub use block_parser::state::{BlockState, ParentType};
pub use block_parser::{BlockParser, BlockRule};

use crate::Error;
use crate::config::Options;
use crate::renderer::Renderer;
use crate::shortcodes::ShortcodeRegistry;
use crate::token::Token;

/// A configured tokenizer plus renderer.
///
/// Construction compiles the marker patterns and wires the rule chain; a
/// parse itself is infallible, since a rule that fails to match simply
/// yields to the next one.
pub struct Parser {
    block: BlockParser,
    renderer: Renderer,
}

impl Parser {
    pub fn new(options: Options, registry: ShortcodeRegistry) -> Result<Self, Error> {
        Ok(Parser {
            block: BlockParser::new(&options, registry)?,
            renderer: Renderer::new(),
        })
    }

    /// Tokenize a document. CRLF line endings are normalized to LF first.
    pub fn parse(&self, input: &str) -> Vec<Token> {
        #[cfg(debug_assertions)]
        {
            crate::init_logger();
        }

        let normalized = input.replace("\r\n", "\n");
        self.block.parse(&normalized)
    }

    /// Tokenize and render a document to HTML.
    pub fn render(&self, input: &str) -> String {
        self.renderer.render(&self.parse(input))
    }

    /// The renderer, for installing custom per-kind rules.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }
}
