//! ATX heading rule.

use super::state::BlockState;
use super::{BlockParser, BlockRule};
use crate::token::Nesting;

pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn run(
        &self,
        _host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        _end_line: usize,
        silent: bool,
    ) -> bool {
        if state.indent(start_line) >= state.blk_indent + 4 {
            return false;
        }

        let line = state.get_line(start_line);
        let level = line.chars().take_while(|&c| c == '#').count();
        if level == 0 || level > 6 {
            return false;
        }

        // Hashes must be followed by a space, tab, or end of line.
        let after = &line[level..];
        if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
            return false;
        }

        if silent {
            return true;
        }

        let text = strip_closing_hashes(after.trim());
        let tag = format!("h{level}");
        let markup = "#".repeat(level);

        let next_line = start_line + 1;
        state.line = next_line;

        let token = state.push("heading_open", &tag, Nesting::Open);
        token.markup = markup.clone();
        token.block = true;
        token.map = Some((start_line, next_line));

        let token = state.push("inline", "", Nesting::SelfContained);
        token.content = text.to_string();
        token.map = Some((start_line, next_line));

        let token = state.push("heading_close", &tag, Nesting::Close);
        token.markup = markup;
        token.block = true;

        true
    }
}

/// Drop an optional run of trailing hashes, but only when a space separates
/// it from the heading text (`# foo #` keeps "foo", `# C#` keeps "C#").
fn strip_closing_hashes(text: &str) -> &str {
    let trimmed = text.trim_end_matches('#');
    if trimmed.len() == text.len() {
        return text;
    }
    if trimmed.is_empty() {
        return "";
    }
    match trimmed.strip_suffix([' ', '\t']) {
        Some(_) => trimmed.trim_end(),
        None => text,
    }
}
