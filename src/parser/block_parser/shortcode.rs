//! Shortcode container block rule.
//!
//! Recognizes Hugo-style container markers,
//!
//! ```text
//! {{< admonition note "Example Sentence" >}}
//! body, tokenized by the host like any other block content
//! {{< /admonition >}}
//! ```
//!
//! and delegates token emission to the [`Shortcode`] resolved from the
//! registry. The marker patterns are configurable; see [`Options`].
//!
//! [`Shortcode`]: crate::shortcodes::Shortcode
//! [`Options`]: crate::config::Options

use regex::Regex;

use super::state::BlockState;
use super::{BlockParser, BlockRule};
use crate::Error;
use crate::config::Options;
use crate::shortcodes::ShortcodeRegistry;

/// Outcome of scanning for a block's closing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Whether an explicit closing marker was located.
    pub found: bool,
    /// Index of the block's final line: the closing marker's line, or the
    /// line scanning stopped on. Never outside the scanned scope.
    pub end_line: usize,
    /// Set together with `found`. False means the block closes implicitly
    /// at the enclosing scope's boundary, which is not an error.
    pub auto_closed: bool,
}

/// The pluggable recognizer invoked by the host tokenizer per candidate
/// line. Holds the compiled marker patterns and the shortcode registry.
pub struct ShortcodeRule {
    open: Regex,
    close: Regex,
    /// First literal character of each pattern, used as a cheap prefilter
    /// that rejects most lines without running the full pattern.
    open_char: Option<char>,
    close_char: Option<char>,
    registry: ShortcodeRegistry,
}

impl ShortcodeRule {
    pub fn new(options: &Options, registry: ShortcodeRegistry) -> Result<Self, Error> {
        let open = compile(
            &options.open_tag_pattern,
            "open_tag_pattern",
            &["type", "params"],
        )?;
        let close = compile(&options.close_tag_pattern, "close_tag_pattern", &["type"])?;
        Ok(ShortcodeRule {
            open_char: leading_literal(&options.open_tag_pattern),
            close_char: leading_literal(&options.close_tag_pattern),
            open,
            close,
            registry,
        })
    }

    /// Walk forward from the opening line looking for this block's closing
    /// marker, honoring the host's indentation rules.
    pub fn scan(
        &self,
        state: &BlockState,
        start_line: usize,
        end_line: usize,
        kind: &str,
    ) -> ScanResult {
        let mut found = false;
        let mut auto_closed = false;
        let mut next_line = start_line;

        loop {
            next_line += 1;
            if next_line >= end_line {
                // Unclosed blocks end implicitly at the enclosing scope's
                // boundary (end of document or end of parent block).
                break;
            }

            if !state.is_empty(next_line) && state.indent(next_line) < state.blk_indent {
                // De-indented content terminates the container, the same
                // way it terminates lists and quotes in the host grammar.
                break;
            }

            let line = state.get_line(next_line);

            if let Some(c) = self.close_char
                && line.chars().next() != Some(c)
            {
                continue;
            }

            let Some(caps) = self.close.captures(line) else {
                continue;
            };
            match caps.name("type") {
                Some(m) if m.as_str() == kind => {}
                // A closer for some other container type never closes this
                // block; keep scanning for a matching one.
                _ => continue,
            }

            if state.indent(next_line) >= state.blk_indent + 4 {
                // Closing marker indented four or more columns is ordinary
                // body content.
                continue;
            }

            found = true;
            auto_closed = true;
            break;
        }

        ScanResult {
            found,
            end_line: next_line,
            auto_closed,
        }
    }
}

impl BlockRule for ShortcodeRule {
    fn run(
        &self,
        host: &BlockParser,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool {
        let line = state.get_line(start_line);

        // Check the first character quickly; this filters out most
        // non-container lines.
        if let Some(c) = self.open_char
            && line.chars().next() != Some(c)
        {
            return false;
        }

        let Some(caps) = self.open.captures(line) else {
            return false;
        };
        let Some(kind) = caps.name("type").map(|m| m.as_str()) else {
            return false;
        };
        let params = caps.name("params").map(|m| m.as_str()).unwrap_or("");

        let Some(shortcode) = self.registry.get(kind) else {
            return false;
        };
        if !shortcode.validate_params(params) {
            return false;
        }

        // The start marker is enough to report success in lookahead mode;
        // no tokens are emitted and no state is touched.
        if silent {
            return true;
        }

        let scan = self.scan(state, start_line, end_line, kind);
        log::debug!(
            "shortcode '{}' spans lines {}..={} (explicit close: {})",
            kind,
            start_line,
            scan.end_line,
            scan.found
        );

        // A rejecting mutator (e.g. malformed title) fails the whole match
        // attempt with nothing emitted and nothing mutated.
        shortcode.mutate_state(host, state, start_line, scan.end_line, params)
    }
}

fn compile(pattern: &str, which: &'static str, captures: &[&'static str]) -> Result<Regex, Error> {
    let regex = Regex::new(pattern).map_err(|source| Error::Pattern { which, source })?;
    for &name in captures {
        if !regex.capture_names().flatten().any(|n| n == name) {
            return Err(Error::MissingCapture { which, name });
        }
    }
    Ok(regex)
}

/// First literal character a pattern can match, skipping a leading
/// start-of-line anchor and one level of escaping.
fn leading_literal(pattern: &str) -> Option<char> {
    let unanchored = pattern.strip_prefix('^').unwrap_or(pattern);
    let mut chars = unanchored.chars();
    match chars.next()? {
        '\\' => chars.next(),
        c => Some(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_literal() {
        assert_eq!(leading_literal(r"\{\{< "), Some('{'));
        assert_eq!(leading_literal(r"^\{\{< "), Some('{'));
        assert_eq!(leading_literal("::open"), Some(':'));
        assert_eq!(leading_literal(""), None);
    }

    #[test]
    fn test_compile_rejects_missing_capture() {
        let err = compile(r"\{\{< (\w+) >\}\}", "open_tag_pattern", &["type"]).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCapture {
                which: "open_tag_pattern",
                name: "type"
            }
        ));
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let err = compile("(?<type>", "close_tag_pattern", &["type"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Pattern {
                which: "close_tag_pattern",
                ..
            }
        ));
    }
}
