/// `TokenStream` - Splits normalized markup into tag and text tokens
///
/// The stream scans left to right with a single cursor. At a `<` it takes
/// the slice up to the matching `>` and classifies it; anywhere else it
/// takes the run up to the next `<` as text. Whitespace-only text runs are
/// swallowed and produce no token at all.
use super::tag::Tag;

/// One lexical unit of the input
#[derive(Debug, Clone)]
pub enum Token<'a> {
    /// A classified `<...>` token
    Tag(Tag<'a>),
    /// A `<...>` token with no parseable identifier (doctype, comment, junk);
    /// emitted verbatim and structurally transparent
    Opaque(&'a str),
    /// A non-empty text run, surrounding whitespace already stripped
    Text(&'a str),
    /// A trailing `<...` with no closing `>`; the whole remainder of the
    /// input, passed through verbatim, and the stream ends after it
    Trailing(&'a str),
}

/// Iterator over the tokens of a normalized fragment
pub struct TokenStream<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if self.pos >= self.src.len() {
                return None;
            }
            let rest = &self.src[self.pos..];

            if rest.starts_with('<') {
                let Some(end) = rest.find('>') else {
                    // Unterminated tag: hand the remainder through and stop.
                    self.pos = self.src.len();
                    return Some(Token::Trailing(rest));
                };
                let raw = &rest[..=end];
                self.pos += end + 1;
                return Some(match Tag::parse(raw) {
                    Some(tag) => Token::Tag(tag),
                    None => Token::Opaque(raw),
                });
            }

            // Text run up to the next tag boundary (or end of input)
            let end = rest.find('<').unwrap_or(rest.len());
            self.pos += end;
            let text = rest[..end].trim();
            if !text.is_empty() {
                return Some(Token::Text(text));
            }
            // Pure whitespace: advance and keep scanning
        }
    }
}
