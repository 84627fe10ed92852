use crate::config::Options;
use crate::parser::block_parser::BlockParser;
use crate::shortcodes::ShortcodeRegistry;
use crate::token::Token;

fn parse(input: &str) -> Vec<Token> {
    BlockParser::new(&Options::default(), ShortcodeRegistry::with_defaults())
        .expect("default host builds")
        .parse(input)
}

fn kinds(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.kind.as_str()).collect()
}

#[test]
fn test_single_paragraph() {
    let tokens = parse("just some text");
    assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
    assert_eq!(tokens[1].content, "just some text");
    assert_eq!(tokens[0].map, Some((0, 1)));
}

#[test]
fn test_multi_line_paragraph_joins_lines() {
    let tokens = parse("line one\nline two");
    assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
    assert_eq!(tokens[1].content, "line one\nline two");
}

#[test]
fn test_blank_line_separates_paragraphs() {
    let tokens = parse("one\n\ntwo");
    assert_eq!(
        kinds(&tokens),
        vec![
            "paragraph_open",
            "inline",
            "paragraph_close",
            "paragraph_open",
            "inline",
            "paragraph_close",
        ]
    );
}

#[test]
fn test_shortcode_open_terminates_paragraph() {
    let input = "some text\n{{< admonition note \"T\" >}}\nbody\n{{< /admonition >}}";
    let tokens = parse(input);
    assert_eq!(tokens[0].kind, "paragraph_open");
    assert_eq!(tokens[1].content, "some text");
    assert_eq!(tokens[0].map, Some((0, 1)));
    assert_eq!(tokens[3].kind, "container_open");
    assert_eq!(tokens[3].map, Some((1, 3)));
}

#[test]
fn test_fence_terminates_paragraph() {
    let tokens = parse("text\n```\ncode\n```");
    assert_eq!(
        kinds(&tokens),
        vec!["paragraph_open", "inline", "paragraph_close", "fence"]
    );
    assert_eq!(tokens[1].content, "text");
}

#[test]
fn test_heading_terminates_paragraph() {
    let tokens = parse("text\n# Head");
    assert_eq!(
        kinds(&tokens),
        vec![
            "paragraph_open",
            "inline",
            "paragraph_close",
            "heading_open",
            "inline",
            "heading_close",
        ]
    );
    assert_eq!(tokens[4].content, "Head");
    assert_eq!(tokens[3].tag, "h1");
    assert_eq!(tokens[3].map, Some((1, 2)));
    assert_eq!(tokens[4].map, Some((1, 2)));
}

#[test]
fn test_unknown_shortcode_line_does_not_terminate() {
    // The silent probe fails registry lookup, so the line stays lazy text.
    let tokens = parse("text\n{{< figure src >}}");
    assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
    assert_eq!(tokens[1].content, "text\n{{< figure src >}}");
}

#[test]
fn test_code_indented_marker_is_lazy_continuation() {
    let tokens = parse("text\n    {{< admonition note \"T\" >}}");
    assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
}
