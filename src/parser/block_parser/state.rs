//! Shared block-tokenizer state: source line tables, cursor, scope bounds.

use crate::token::{Nesting, Token};

/// Tag of the block currently being tokenized into.
///
/// Block rules use this to decide whether lazy continuations may cross the
/// current container's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentType {
    Root,
    Paragraph,
    Blockquote,
    List,
    Reference,
    Shortcode,
}

/// Mutable state shared by all block rules for the duration of one parse.
///
/// Holds the source buffer, per-line offset/indentation tables, the line
/// cursor and the active scope bounds. Rules that temporarily override
/// `parent_type` or `line_max` must restore them before returning control
/// to the tokenizer.
#[derive(Debug)]
pub struct BlockState<'a> {
    pub src: &'a str,
    pub tokens: Vec<Token>,
    /// Per-line start byte offsets.
    b_marks: Vec<usize>,
    /// Per-line end byte offsets (excluding the newline).
    e_marks: Vec<usize>,
    /// Per-line byte offset of the first non-whitespace character,
    /// relative to the line start.
    t_shift: Vec<usize>,
    /// Per-line leading indentation in columns (tab stop of 4).
    s_count: Vec<usize>,
    /// Required indentation baseline for the active block.
    pub blk_indent: usize,
    /// Line cursor.
    pub line: usize,
    /// Upper line bound of the active scope.
    pub line_max: usize,
    pub parent_type: ParentType,
    /// Current container nesting level.
    pub level: usize,
}

impl<'a> BlockState<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut b_marks = Vec::new();
        let mut e_marks = Vec::new();
        let mut t_shift = Vec::new();
        let mut s_count = Vec::new();

        let mut pos = 0;
        for line in src.split('\n') {
            let mut shift = line.len();
            let mut cols = 0;
            for (i, ch) in line.char_indices() {
                match ch {
                    ' ' => cols += 1,
                    '\t' => cols += 4 - cols % 4,
                    _ => {
                        shift = i;
                        break;
                    }
                }
            }
            b_marks.push(pos);
            e_marks.push(pos + line.len());
            t_shift.push(shift);
            s_count.push(cols);
            pos += line.len() + 1;
        }

        let line_max = b_marks.len();
        BlockState {
            src,
            tokens: Vec::new(),
            b_marks,
            e_marks,
            t_shift,
            s_count,
            blk_indent: 0,
            line: 0,
            line_max,
            parent_type: ParentType::Root,
            level: 0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.b_marks.len()
    }

    /// Leading indentation of a line, in columns.
    pub fn indent(&self, line: usize) -> usize {
        self.s_count[line]
    }

    /// True if the line holds no non-whitespace content.
    pub fn is_empty(&self, line: usize) -> bool {
        self.b_marks[line] + self.t_shift[line] >= self.e_marks[line]
    }

    /// First line at or after `from` that is not blank.
    pub fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_count() && self.is_empty(from) {
            from += 1;
        }
        from
    }

    /// Line content from its first non-whitespace character to end-of-line.
    pub fn get_line(&self, line: usize) -> &'a str {
        &self.src[self.b_marks[line] + self.t_shift[line]..self.e_marks[line]]
    }

    /// Join the raw text of lines `[begin, end)`, stripping up to `indent`
    /// columns of leading whitespace from each and terminating each line
    /// with a newline.
    pub fn get_lines(&self, begin: usize, end: usize, indent: usize) -> String {
        let mut out = String::new();
        for line in begin..end.min(self.line_count()) {
            let start = self.byte_after_columns(line, indent);
            out.push_str(&self.src[start..self.e_marks[line]]);
            out.push('\n');
        }
        out
    }

    /// Byte offset just past `columns` columns of leading whitespace.
    fn byte_after_columns(&self, line: usize, columns: usize) -> usize {
        let bytes = self.src.as_bytes();
        let mut pos = self.b_marks[line];
        let mut col = 0;
        while pos < self.e_marks[line] && col < columns {
            match bytes[pos] {
                b' ' => col += 1,
                b'\t' => col += 4 - col % 4,
                _ => break,
            }
            pos += 1;
        }
        pos
    }

    /// Append a token to the stream, maintaining the nesting level.
    pub fn push(&mut self, kind: &str, tag: &str, nesting: Nesting) -> &mut Token {
        if nesting == Nesting::Close {
            self.level = self.level.saturating_sub(1);
        }
        let mut token = Token::new(kind, tag, nesting);
        token.level = self.level;
        if nesting == Nesting::Open {
            self.level += 1;
        }
        let idx = self.tokens.len();
        self.tokens.push(token);
        &mut self.tokens[idx]
    }
}
