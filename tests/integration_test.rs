//! Integration tests for hprettier
//!
//! These tests verify that the components work together correctly

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{BufReader, Cursor};

use pretty_assertions::assert_eq;

use hprettier::format::IndentTracker;
use hprettier::parser::{Token, TokenStream, VOID_ELEMENT_NAMES};
use hprettier::process::{format_file, format_fragment};
use hprettier::Config;

fn format(html: &str) -> String {
    format_fragment(html, &Config::default())
}

/// Collapse formatted output back to a single line by removing the
/// formatting characters the formatter introduces.
fn collapse(formatted: &str) -> String {
    formatted.replace(['\n', '\t'], "")
}

/// Final nesting depth after replaying the level transitions the pipeline
/// applies while emitting.
fn final_depth(html: &str) -> i32 {
    let mut tracker = IndentTracker::new();
    for token in TokenStream::new(html) {
        if let Token::Tag(tag) = token {
            if tag.is_self_closing {
                continue;
            }
            if tag.is_closing {
                tracker.close();
            } else {
                tracker.open();
            }
        }
    }
    tracker.depth()
}

#[test]
fn test_simple_nested_fragment() {
    assert_eq!(
        format("<div><p>Hi</p></div>"),
        "<div>\n\t<p>Hi</p>\n</div>\n"
    );
}

#[test]
fn test_text_preserved_on_tag_line() {
    let out = format("<p>Our Greenway</p>");
    assert_eq!(out, "<p>Our Greenway\n</p>\n");
    assert!(out.lines().next().unwrap().ends_with("Our Greenway"));
}

#[test]
fn test_inter_tag_whitespace_equivalence() {
    assert_eq!(
        format("<ul>   <li>A</li>   <li>B</li>   </ul>"),
        format("<ul><li>A</li><li>B</li></ul>")
    );
}

#[test]
fn test_self_closing_leaves_closer_at_base() {
    assert_eq!(
        format("<div><img src='x'/></div>"),
        "<div>\n\t<img src='x'/>\n</div>\n"
    );
}

#[test]
fn test_malformed_input_is_tolerated() {
    // Unterminated span, missing closes: all literal characters survive
    let out = format("<div><span>text");
    assert_eq!(out, "<div>\n\t<span>text\n");
}

#[test]
fn test_reformat_stability() {
    let fragments = [
        "<div><p>Hi</p></div>",
        "<ul>  <li>A</li>  <li>B</li>  </ul>",
        "<p>Our Greenway</p>",
        "<div><img src='x'/><br><span>text</span></div>",
        "<section><article><h1>Title</h1><p>Body text</p></article></section>",
    ];
    for fragment in fragments {
        let once = format(fragment);
        let twice = format(&collapse(&once));
        assert_eq!(twice, once, "reformatting drifted for {fragment:?}");
    }
}

#[test]
fn test_balanced_input_returns_to_depth_zero() {
    assert_eq!(final_depth("<div><ul><li>A</li><li>B</li></ul></div>"), 0);
    assert_eq!(
        final_depth("<html><body><div><p>x</p></div></body></html>"),
        0
    );
}

#[test]
fn test_unbalanced_input_depth() {
    assert_eq!(final_depth("<div><span>"), 2);
    assert_eq!(final_depth("</div></div>"), -2);
}

#[test]
fn test_void_elements_never_change_depth() {
    for name in VOID_ELEMENT_NAMES {
        assert_eq!(final_depth(&format!("<{name}>")), 0, "<{name}>");
        assert_eq!(final_depth(&format!("<{name}/>")), 0, "<{name}/>");
        let upper = name.to_ascii_uppercase();
        assert_eq!(final_depth(&format!("<{upper}>")), 0, "<{upper}>");
    }
}

#[test]
fn test_trailing_newline_exactly_one() {
    for fragment in ["<br>", "<p>x</p>", "text only", "<div><span>text"] {
        let out = format(fragment);
        assert!(out.ends_with('\n'), "missing newline for {fragment:?}");
        assert!(!out.ends_with("\n\n"), "double newline for {fragment:?}");
    }
}

#[test]
fn test_empty_and_whitespace_inputs() {
    assert_eq!(format(""), "");
    assert_eq!(format("   \n\t  "), "");
}

#[test]
fn test_full_document_rendering() {
    let input = concat!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
        "<title>Site</title></head><body><div class=\"nav\">",
        "<ul><li>Home</li><li>About</li></ul></div><hr>",
        "<img src=\"logo.png\"/></body></html>"
    );
    let expected = "<!DOCTYPE html>\n\
                    <html>\n\
                    \t<head>\n\
                    \t\t<meta charset=\"utf-8\">\n\
                    \t\t<title>Site\n\
                    \t\t</title>\n\
                    \t</head>\n\
                    \t<body>\n\
                    \t\t<div class=\"nav\">\n\
                    \t\t\t<ul>\n\
                    \t\t\t\t<li>Home\n\
                    \t\t\t\t</li>\n\
                    \t\t\t\t<li>About\n\
                    \t\t\t\t</li>\n\
                    \t\t\t</ul>\n\
                    \t\t</div>\n\
                    \t\t<hr>\n\
                    \t\t<img src=\"logo.png\"/>\n\
                    \t</body>\n\
                    </html>\n";
    assert_eq!(format(input), expected);
}

#[test]
fn test_spaces_configuration_end_to_end() {
    let config = Config {
        indent: 2,
        use_spaces: true,
    };
    assert_eq!(
        format_fragment("<div><p>Hi</p></div>", &config),
        "<div>\n  <p>Hi</p>\n</div>\n"
    );
}

#[test]
fn test_format_file_trims_surrounding_whitespace() {
    let input = BufReader::new(Cursor::new("\n\n  <div><p>Hi</p></div>  \n"));
    let mut output = Vec::new();
    format_file(input, &mut output, &Config::default()).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "<div>\n\t<p>Hi</p>\n</div>\n"
    );
}

#[test]
fn test_format_file_rejects_invalid_utf8() {
    let input = BufReader::new(Cursor::new(&[0x3c, 0x64, 0xff, 0xfe][..]));
    let mut output = Vec::new();
    let result = format_file(input, &mut output, &Config::default());
    assert!(result.is_err());
}
