//! Paragraph rule with terminator lookahead.

use super::state::{BlockState, ParentType};
use super::{BlockParser, BlockRule};
use crate::token::Nesting;

pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn run(
        &self,
        host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        _end_line: usize,
        silent: bool,
    ) -> bool {
        // A paragraph never acts as a terminator for other blocks.
        if silent {
            return false;
        }

        // Lazy continuations stop at the active scope's line cap, which
        // container rules lower while their body is being tokenized.
        let end_line = state.line_max;

        let old_parent = state.parent_type;
        state.parent_type = ParentType::Paragraph;

        let mut next_line = start_line + 1;
        while next_line < end_line && !state.is_empty(next_line) {
            // Code-indented continuation lines are lazy text, never a new block.
            if state.indent(next_line) >= state.blk_indent + 4 {
                next_line += 1;
                continue;
            }

            let terminated = host
                .terminator_rules("paragraph")
                .any(|rule| rule.run(host, state, next_line, end_line, true));
            if terminated {
                break;
            }
            next_line += 1;
        }

        let content = state.get_lines(start_line, next_line, state.blk_indent);
        let content = content.trim();

        state.line = next_line;

        let token = state.push("paragraph_open", "p", Nesting::Open);
        token.block = true;
        token.map = Some((start_line, next_line));

        let token = state.push("inline", "", Nesting::SelfContained);
        token.content = content.to_string();
        token.map = Some((start_line, next_line));

        let token = state.push("paragraph_close", "p", Nesting::Close);
        token.block = true;

        state.parent_type = old_parent;
        true
    }
}
