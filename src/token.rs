//! Token stream primitives produced by the block tokenizer.

/// Nesting delta carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// Opens a container (+1).
    Open,
    /// Self-contained token (0), e.g. a fence or an inline run.
    SelfContained,
    /// Closes a container (-1).
    Close,
}

impl Nesting {
    pub fn delta(self) -> i32 {
        match self {
            Nesting::Open => 1,
            Nesting::SelfContained => 0,
            Nesting::Close => -1,
        }
    }
}

/// One element of the ordered token stream.
///
/// Tokens are created by block rules through [`BlockState::push`] and owned
/// by the stream until rendering. Inline content (`content`) is raw text;
/// inline markup parsing is deferred and not performed by this crate.
///
/// [`BlockState::push`]: crate::parser::block_parser::state::BlockState::push
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type tag, e.g. `container_open` or `paragraph_close`.
    pub kind: String,
    /// HTML tag name used by the default renderer, e.g. `div` or `p`.
    pub tag: String,
    pub nesting: Nesting,
    /// Attribute list in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Source line range `[begin, end)`.
    pub map: Option<(usize, usize)>,
    /// Nesting level at the time of emission.
    pub level: usize,
    /// Raw text content for `inline` and `fence` tokens.
    pub content: String,
    /// The marker text that produced this token.
    pub markup: String,
    /// Extra type information (fence info string, admonition subtype).
    pub info: String,
    /// True for block-level tokens; controls newline emission in rendering.
    pub block: bool,
    /// Nested tokens from a later inline-parsing phase; always empty here.
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: impl Into<String>, tag: impl Into<String>, nesting: Nesting) -> Self {
        Token {
            kind: kind.into(),
            tag: tag.into(),
            nesting,
            attrs: Vec::new(),
            map: None,
            level: 0,
            content: String::new(),
            markup: String::new(),
            info: String::new(),
            block: false,
            children: Vec::new(),
        }
    }

    /// Append an attribute to the list.
    pub fn attr_push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Look up the first attribute with the given name.
    pub fn attr_get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
