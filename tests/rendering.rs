use similar_asserts::assert_eq;

use shortmark::{Error, Options, Parser, ShortcodeRegistry, parse, render};

#[test]
fn test_admonition_html() {
    let input = "{{< admonition note \"Example\" >}}\nbody text\n{{< /admonition >}}";
    assert_eq!(
        render(input),
        "<div class=\"details admonition note\">\n\
         <div class=\"details-summary admonition-title\">Example</div>\
         <p>body text</p>\n\
         </div>\n"
    );
}

#[test]
fn test_document_with_heading_and_fence_body() {
    let input = "# Guide\n\n\
                 intro\n\n\
                 {{< admonition warning \"Careful\" >}}\n\
                 ```sh\nrm -i file\n```\n\
                 {{< /admonition >}}";
    assert_eq!(
        render(input),
        "<h1>Guide</h1>\n\
         <p>intro</p>\n\
         <div class=\"details admonition warning\">\n\
         <div class=\"details-summary admonition-title\">Careful</div>\
         <pre><code class=\"language-sh\">rm -i file\n</code></pre>\n\
         </div>\n"
    );
}

#[test]
fn test_title_is_escaped() {
    let input = "{{< admonition note \"a <b> & c\" >}}\n{{< /admonition >}}";
    let html = render(input);
    assert!(html.contains("a &lt;b&gt; &amp; c"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_parse_is_deterministic() {
    let input = "{{< admonition note \"T\" >}}\nbody\n{{< /admonition >}}\n\npara";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn test_crlf_is_normalized() {
    let lf = "{{< admonition note \"T\" >}}\nbody\n{{< /admonition >}}";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse(lf), parse(&crlf));
}

#[test]
fn test_custom_marker_patterns() {
    let options = Options {
        open_tag_pattern: r"^::(?<type>\w+) (?<params>.*)$".to_string(),
        close_tag_pattern: r"^::/(?<type>\w+)$".to_string(),
        ..Options::default()
    };
    let parser = Parser::new(options, ShortcodeRegistry::with_defaults()).unwrap();
    let tokens = parser.parse("::admonition note \"T\"\nbody\n::/admonition");
    assert_eq!(tokens[0].kind, "container_open");
    assert_eq!(tokens[0].attr_get("class"), Some("details admonition note"));
    assert_eq!(tokens[0].map, Some((0, 2)));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let options = Options {
        open_tag_pattern: "(?<type>".to_string(),
        ..Options::default()
    };
    let err = Parser::new(options, ShortcodeRegistry::with_defaults())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        Error::Pattern {
            which: "open_tag_pattern",
            ..
        }
    ));
}

#[test]
fn test_pattern_without_required_capture_is_rejected() {
    let options = Options {
        close_tag_pattern: r"\{\{< /(\w+) >\}\}$".to_string(),
        ..Options::default()
    };
    let err = Parser::new(options, ShortcodeRegistry::with_defaults())
        .err()
        .unwrap();
    assert!(matches!(
        err,
        Error::MissingCapture {
            which: "close_tag_pattern",
            name: "type"
        }
    ));
}

#[test]
fn test_plain_markdown_untouched_by_shortcode_rule() {
    let html = render("# Title\n\nplain paragraph");
    assert_eq!(html, "<h1>Title</h1>\n<p>plain paragraph</p>\n");
}

#[test]
fn test_options_deserialize_with_defaults() {
    let json = r#"{ "max_nesting": 5 }"#;
    let options: Options = serde_json::from_str(json).unwrap();
    assert_eq!(options.max_nesting, 5);
    assert_eq!(options.open_tag_pattern, shortmark::config::DEFAULT_OPEN_TAG_PATTERN);
}
