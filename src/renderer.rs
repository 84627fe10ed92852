//! Minimal HTML rendering for the token stream.
//!
//! Rendering here is deliberately thin: tokens already carry their tag and
//! attributes (including the shortcode `class`), so most kinds go through
//! the generic [`render_token`] path. A rule map allows per-kind overrides,
//! and unknown kinds fall back to the generic path.

use std::collections::HashMap;

use crate::token::{Nesting, Token};

/// Renders one token, given the whole stream and the token's index.
pub type RenderFn = fn(&[Token], usize) -> String;

pub struct Renderer {
    rules: HashMap<String, RenderFn>,
}

impl Renderer {
    /// Renderer with the default rules installed: the four shortcode
    /// container kinds, plus `inline`, `fence`, and the paragraph/heading
    /// pairs.
    pub fn new() -> Self {
        let mut renderer = Renderer {
            rules: HashMap::new(),
        };
        for kind in [
            "container_open",
            "title_open",
            "title_close",
            "container_close",
        ] {
            renderer.rule(kind, render_token);
        }
        renderer.rule("inline", render_inline);
        renderer.rule("fence", render_fence);
        renderer
    }

    /// Install or replace the rendering rule for a token kind.
    pub fn rule(&mut self, kind: &str, f: RenderFn) {
        self.rules.insert(kind.to_string(), f);
    }

    pub fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        for idx in 0..tokens.len() {
            match self.rules.get(tokens[idx].kind.as_str()) {
                Some(rule) => out.push_str(&rule(tokens, idx)),
                None => out.push_str(&render_token(tokens, idx)),
            }
        }
        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic tag renderer: `<tag attrs>` for opening tokens, `</tag>` for
/// closing ones. Closing tags never carry attributes. Block tokens are
/// newline-terminated unless an inline token follows immediately.
pub fn render_token(tokens: &[Token], idx: usize) -> String {
    let token = &tokens[idx];
    let mut out = match token.nesting {
        Nesting::Close => format!("</{}>", token.tag),
        _ => {
            let mut tag = format!("<{}", token.tag);
            for (name, value) in &token.attrs {
                tag.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            tag.push('>');
            tag
        }
    };

    let next_is_inline = tokens.get(idx + 1).is_some_and(|t| t.kind == "inline");
    if token.block && !(token.nesting == Nesting::Open && next_is_inline) {
        out.push('\n');
    }
    out
}

fn render_inline(tokens: &[Token], idx: usize) -> String {
    escape_html(&tokens[idx].content)
}

fn render_fence(tokens: &[Token], idx: usize) -> String {
    let token = &tokens[idx];
    let code = escape_html(&token.content);
    if token.info.is_empty() {
        format!("<pre><code>{code}</code></pre>\n")
    } else {
        let lang = token.info.split_whitespace().next().unwrap_or("");
        format!(
            "<pre><code class=\"language-{}\">{code}</code></pre>\n",
            escape_html(lang)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
