//! Block tokenizer host: an ordered, pluggable rule chain driven over a
//! line-indexed source buffer.

use crate::Error;
use crate::config::Options;
use crate::shortcodes::ShortcodeRegistry;
use crate::token::Token;

mod fence;
mod heading;
mod paragraph;
pub mod ruler;
pub mod shortcode;
pub mod state;

use fence::FenceRule;
use heading::HeadingRule;
use paragraph::ParagraphRule;
use ruler::Ruler;
use shortcode::ShortcodeRule;
use state::BlockState;

/// A pluggable line-range recognizer, tried in priority order by the host.
///
/// `run` inspects the candidate line at `start_line` within the scope
/// bounded by `end_line` and returns whether it matched. In silent mode a
/// rule must report match/no-match without emitting tokens or mutating
/// state; otherwise a match must consume lines by advancing `state.line`.
pub trait BlockRule: Send + Sync {
    fn run(
        &self,
        host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool;
}

/// The block tokenizer. Holds the rule chain; all per-parse state lives in
/// [`BlockState`], so one parser can serve any number of sequential parses.
pub struct BlockParser {
    ruler: Ruler<Box<dyn BlockRule>>,
    max_nesting: usize,
}

impl BlockParser {
    /// Build the rule chain. The shortcode rule is slotted before the
    /// fenced-code rule so container markers win over fences, and it is
    /// eligible as a terminator in the paragraph/reference/blockquote/list
    /// chains.
    pub fn new(options: &Options, registry: ShortcodeRegistry) -> Result<Self, Error> {
        let mut ruler: Ruler<Box<dyn BlockRule>> = Ruler::new();
        ruler.push(
            "fence",
            &["paragraph", "reference", "blockquote", "list"],
            Box::new(FenceRule),
        );
        ruler.push(
            "heading",
            &["paragraph", "reference", "blockquote"],
            Box::new(HeadingRule),
        );
        ruler.push("paragraph", &[], Box::new(ParagraphRule));

        let shortcode = ShortcodeRule::new(options, registry)?;
        ruler.before(
            "fence",
            "shortcode",
            &["paragraph", "reference", "blockquote", "list"],
            Box::new(shortcode),
        )?;

        Ok(BlockParser {
            ruler,
            max_nesting: options.max_nesting,
        })
    }

    /// Tokenize a whole document into a flat, balanced token stream.
    pub fn parse(&self, src: &str) -> Vec<Token> {
        let mut state = BlockState::new(src);
        let end_line = state.line_count();
        self.tokenize(&mut state, 0, end_line);
        state.tokens
    }

    /// Tokenize the line range `[start_line, end_line)`. Container rules
    /// re-enter this for their nested body content, so depth is bounded by
    /// `max_nesting` rather than left to the call stack.
    pub fn tokenize(&self, state: &mut BlockState, start_line: usize, end_line: usize) {
        if state.level >= self.max_nesting {
            // Too deep; consume the range without producing tokens.
            state.line = end_line;
            return;
        }

        let mut line = start_line;
        state.line = line;

        while line < end_line {
            line = state.skip_empty_lines(line);
            state.line = line;
            if line >= end_line {
                break;
            }

            // De-indented content belongs to an outer scope.
            if state.indent(line) < state.blk_indent {
                break;
            }

            log::debug!("tokenizing line {}: {:?}", line, state.get_line(line));

            for (name, rule) in self.ruler.rules("") {
                if rule.run(self, state, line, end_line, false) {
                    log::trace!("rule '{}' consumed lines {}..{}", name, line, state.line);
                    break;
                }
            }

            if state.line <= line {
                // No rule claimed the line (or one matched without
                // consuming); skip it.
                state.line = line + 1;
            }
            line = state.line;
        }
    }

    /// Rules participating in the named alternate chain, used by rules that
    /// probe for block starts in silent mode.
    pub fn terminator_rules<'a>(
        &'a self,
        chain: &'a str,
    ) -> impl Iterator<Item = &'a dyn BlockRule> {
        self.ruler.rules(chain).map(|(_, rule)| rule.as_ref())
    }
}
