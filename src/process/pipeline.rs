//! Single-pass formatting pipeline
//!
//! Implements the formatting pass: normalize the fragment, walk the token
//! stream while tracking nesting depth, and emit one tag per line.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::format::IndentTracker;
use crate::parser::{Token, TokenStream};
use crate::Result;

/// Whitespace sitting strictly between a `>` and the following `<`.
///
/// Collapsed globally before scanning so that pretty-printed or otherwise
/// line-broken input reduces to the same token sequence as its single-line
/// equivalent. Whitespace inside text runs is left alone.
static INTER_TAG_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("inter-tag whitespace pattern is valid"));

/// Format an HTML fragment into an indented, one-tag-per-line rendering.
///
/// Total over all inputs: malformed markup never fails, it degrades to
/// best-effort output. Over-closed input may drive the nesting level
/// negative, which renders as zero indentation.
///
/// The result is empty for whitespace-only input; any other result carries
/// exactly one trailing newline.
#[must_use]
pub fn format_fragment(html: &str, config: &Config) -> String {
    let collapsed = INTER_TAG_WS_RE.replace_all(html.trim(), "><");
    let unit = config.indent_unit();

    let mut tracker = IndentTracker::new();
    let mut out = String::with_capacity(collapsed.len() + collapsed.len() / 4);

    for token in TokenStream::new(&collapsed) {
        match token {
            Token::Tag(tag) => {
                // Closing tags dedent before they are emitted; self-closing
                // tags (explicit /> or void elements) never move the level.
                if tag.is_closing && !tag.is_self_closing {
                    tracker.close();
                }

                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&tracker.prefix(&unit));
                out.push_str(tag.raw);

                if !tag.is_closing && !tag.is_self_closing {
                    tracker.open();
                }
            }
            Token::Text(text) => {
                // Text shares the line of the tag that precedes it
                out.push_str(text);
            }
            Token::Opaque(raw) | Token::Trailing(raw) => {
                // Unclassified tokens pass through in place: no newline,
                // no indent, no level change
                out.push_str(raw);
            }
        }
    }

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Read an entire fragment from `input`, format it, and write the result.
///
/// The input is read as UTF-8 and trimmed of surrounding whitespace before
/// formatting, matching the CLI contract.
pub fn format_file<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<()> {
    let mut contents = String::new();
    input.read_to_string(&mut contents)?;

    let formatted = format_fragment(&contents, config);
    output.write_all(formatted.as_bytes())?;

    Ok(())
}
