//! Tests for the reformatter, normalization and style cross-check.

use super::*;

const MINIFIED: &str = "@import url(theme.css);:root{--accent:#0af}\
body{margin:0;font:14px/1.4 system-ui,sans-serif}\
.diff-line.added{background:#e6ffed}/* keep */\
.icon{background:url(data:image/png;base64,iVBORw0KGgo=) no-repeat;content:\"a;b{c}\"}\
@media (max-width:600px){.pane{display:none}.toolbar{flex-direction:column}}";

#[test]
fn simple_rule_layout() {
    assert_eq!(
        reformat(".a{color:red;background:blue}"),
        ".a {\n  color:red;\n  background:blue\n}"
    );
}

#[test]
fn simple_rule_normalizes_like_spaced_form() {
    let out = reformat(".a{color:red;background:blue}");
    assert_eq!(
        normalize(&out),
        normalize(".a { color: red; background: blue; }")
    );
}

#[test]
fn closing_brace_is_followed_by_blank_line() {
    assert_eq!(reformat(".a{x:1}.b{y:2}"), ".a {\n  x:1\n}\n\n.b {\n  y:2\n}");
}

#[test]
fn nested_blocks_indent_and_dedent() {
    assert_eq!(
        reformat("@media (max-width:600px){.a{color:red}}"),
        "@media (max-width:600px) {\n  .a {\n    color:red\n  }\n}"
    );
}

#[test]
fn quoted_data_url_stays_on_one_line() {
    let css = r#".i{content:"data:image/svg+xml;base64,AAAA==";color:red}"#;
    let out = reformat(css);
    let line = out
        .lines()
        .find(|l| l.contains("data:image"))
        .expect("data url line");
    assert!(line.contains(r#""data:image/svg+xml;base64,AAAA==""#));
}

#[test]
fn unquoted_url_payload_is_not_split() {
    let out = reformat(".i{background:url(data:image/png;base64,iVBO=);color:red}");
    assert!(out
        .lines()
        .any(|l| l.trim() == "background:url(data:image/png;base64,iVBO=);"));
}

#[test]
fn braces_and_semicolons_in_strings_are_literal() {
    let out = reformat(r#".q{content:"a;b{c}d"}"#);
    assert_eq!(out, ".q {\n  content:\"a;b{c}d\"\n}");
}

#[test]
fn escaped_quote_does_not_close_string() {
    let out = reformat(r#".q{content:"say \"hi;\" now";x:1}"#);
    assert!(out.contains(r#"content:"say \"hi;\" now";"#));
    assert!(out.contains("\n  x:1\n"));
}

#[test]
fn escaped_backslash_before_quote_closes_string() {
    let out = reformat(r#".q{content:"\\";x:1}"#);
    assert_eq!(out, ".q {\n  content:\"\\\\\";\n  x:1\n}");
}

#[test]
fn comments_pass_through_untouched() {
    let out = reformat(".a{/* a;b{c} */color:red}");
    assert!(out.contains("/* a;b{c} */color:red"));
}

#[test]
fn control_whitespace_collapses() {
    assert_eq!(reformat(".a\n\t{\r\n color :\tred\n}"), ".a {\n  color : red\n}");
}

#[test]
fn unbalanced_close_floors_depth_at_zero() {
    assert_eq!(reformat("}}.a{x:1}"), "}\n}\n\n.a {\n  x:1\n}");
}

#[test]
fn unbalanced_paren_does_not_swallow_later_rules() {
    assert_eq!(
        reformat(".a{x:calc(1px}.b{y:2;z:3}"),
        ".a {\n  x:calc(1px\n}\n\n.b {\n  y:2;\n  z:3\n}"
    );
}

#[test]
fn non_breaking_space_is_not_css_whitespace() {
    let out = reformat(".a{font-family:A\u{a0}B}");
    assert_eq!(out, ".a {\n  font-family:A\u{a0}B\n}");
    assert_ne!(
        normalize(".a{font-family:A\u{a0}B}"),
        normalize(".a{font-family:A B}")
    );
}

#[test]
fn custom_indent_is_used() {
    assert_eq!(reformat_with_indent(".a{x:1}", "\t"), ".a {\n\tx:1\n}");
}

#[test]
fn reformat_is_idempotent() {
    let once = reformat(MINIFIED);
    assert_eq!(reformat(&once), once);
}

#[test]
fn reformat_round_trips_under_normalization() {
    let out = reformat(MINIFIED);
    assert_eq!(normalize(&out), normalize(MINIFIED));
    assert!(out.lines().count() > 10);
}

#[test]
fn normalize_strips_comments_but_not_strings() {
    assert_eq!(normalize(".a{ /* x */ color : red ; }"), ".a{color:red}");
    assert_eq!(
        normalize(r#".a{content:"/* not a comment */"}"#),
        r#".a{content:"/* not a comment */"}"#
    );
}

#[test]
fn normalize_keeps_descendant_combinators() {
    assert_ne!(normalize(".a .b{x:1}"), normalize(".a.b{x:1}"));
}

#[test]
fn normalize_keeps_space_before_selector_colon() {
    assert_ne!(normalize(".a :hover{x:1}"), normalize(".a:hover{x:1}"));
    assert_eq!(normalize(".a :hover{x:1}"), ".a :hover{x:1}");
}

#[test]
fn normalize_tightens_declaration_and_media_colons() {
    assert_eq!(
        normalize("@media (max-width : 600px) { .a { color : red } }"),
        "@media (max-width:600px){.a{color:red}}"
    );
    assert_eq!(normalize(".a{x : 1;y :2}"), ".a{x:1;y:2}");
}

#[test]
fn reformatted_pseudo_selectors_still_compare_equal() {
    let css = ".a :hover{color:red}.b:focus{x:1}";
    assert_eq!(normalize(&reformat(css)), normalize(css));
}

#[test]
fn style_blocks_are_matched_non_greedily() {
    let doc = "<style>.a{x:1}</style><p>between</p><STYLE media=\"print\">.b{y:2}</STYLE>";
    assert_eq!(style_blocks(doc), vec![".a{x:1}", ".b{y:2}"]);
}

#[test]
fn format_style_blocks_rewrites_each_block() {
    let doc = "<head><style>.a{color:red;background:blue}</style></head>\
               <body><style id=\"late\">.b{x:1}</style><style> </style></body>";
    let (out, count) = format_style_blocks(doc, DEFAULT_INDENT);
    assert_eq!(count, 2);
    assert!(out.contains(
        "<style>\n.a {\n  color:red;\n  background:blue\n}\n</style>"
    ));
    assert!(out.contains("<style id=\"late\">\n.b {\n  x:1\n}\n</style>"));
    assert!(out.contains("<style> </style>"));
    assert!(out.contains("<body>"));
}

#[test]
fn format_style_blocks_is_idempotent() {
    let doc = format!("<style>{MINIFIED}</style>");
    let (once, _) = format_style_blocks(&doc, DEFAULT_INDENT);
    let (twice, _) = format_style_blocks(&once, DEFAULT_INDENT);
    assert_eq!(once, twice);
}

#[test]
fn compare_styles_accepts_reformatted_document() {
    let minified = format!("<style>{MINIFIED}</style><style>.x{{y:z}}</style>");
    let (readable, _) = format_style_blocks(&minified, DEFAULT_INDENT);
    assert!(compare_styles(&readable, &minified).is_ok());
}

#[test]
fn compare_styles_reports_first_difference() {
    let err = compare_styles(
        "<style>.a{color:red}</style>",
        "<style>.a{color:blue}</style>",
    )
    .unwrap_err();
    match err {
        bundleguard_common::PipelineError::StyleMismatch {
            offset,
            readable,
            minified,
        } => {
            assert_eq!(offset, 9);
            assert!(readable.contains("red"));
            assert!(minified.contains("blue"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn compare_styles_detects_missing_block() {
    let err = compare_styles("<style>.a{x:1}</style>", "<style>.a{x:1}</style><style>.b{y:2}</style>");
    assert!(err.is_err());
}

#[test]
fn format_file_rewrites_only_when_needed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, "<style>.a{x:1}</style>").unwrap();

    assert_eq!(format_file(&path, DEFAULT_INDENT).unwrap(), 1);
    let first = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first, "<style>\n.a {\n  x:1\n}\n</style>");

    format_file(&path, DEFAULT_INDENT).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn compare_files_requires_both_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let readable = dir.path().join("index.html");
    std::fs::write(&readable, "<style>.a{x:1}</style>").unwrap();
    let err = compare_files(&readable, &dir.path().join("index.min.html")).unwrap_err();
    assert!(matches!(
        err,
        bundleguard_common::PipelineError::MissingInputFile(_)
    ));
}
