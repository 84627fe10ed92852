//! Fenced code block rule.

use super::state::BlockState;
use super::{BlockParser, BlockRule};
use crate::token::Nesting;

pub struct FenceRule;

impl BlockRule for FenceRule {
    fn run(
        &self,
        _host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        if state.indent(start_line) >= state.blk_indent + 4 {
            return false;
        }

        let line = state.get_line(start_line);
        let marker = match line.chars().next() {
            Some(c @ ('`' | '~')) => c,
            _ => return false,
        };
        let len = line.chars().take_while(|&c| c == marker).count();
        if len < 3 {
            return false;
        }

        let info = line[len..].trim();
        // Backtick fences cannot carry backticks in the info string, or a
        // one-line `` `foo` `` span would be mistaken for a fence.
        if marker == '`' && info.contains('`') {
            return false;
        }

        if silent {
            return true;
        }

        let mut next_line = start_line;
        let mut have_end = false;
        loop {
            next_line += 1;
            if next_line >= end_line {
                // Unclosed fence runs to the end of the scope.
                break;
            }

            if !state.is_empty(next_line) && state.indent(next_line) < state.blk_indent {
                break;
            }

            let candidate = state.get_line(next_line);
            if !candidate.starts_with(marker) {
                continue;
            }
            if state.indent(next_line) >= state.blk_indent + 4 {
                // Closing fence must be indented less than 4 columns.
                continue;
            }
            let close_len = candidate.chars().take_while(|&c| c == marker).count();
            if close_len < len {
                continue;
            }
            if !candidate[close_len..].trim().is_empty() {
                continue;
            }

            have_end = true;
            break;
        }

        let consumed = next_line + usize::from(have_end);
        let content = state.get_lines(start_line + 1, next_line, state.blk_indent);
        let markup = marker.to_string().repeat(len);

        let token = state.push("fence", "code", Nesting::SelfContained);
        token.info = info.to_string();
        token.content = content;
        token.markup = markup;
        token.block = true;
        token.map = Some((start_line, consumed));

        state.line = consumed;
        true
    }
}
