/// Tag token classification
///
/// A tag token is the substring from `<` to its matching `>`, inclusive.
/// The identifier after the optional `/` is lexed by hand: ASCII letters,
/// digits and underscores only. Tokens without such an identifier
/// (`<!DOCTYPE html>`, `<!-- -->`, `<?xml?>`) fail classification and are
/// passed through by the caller untouched.
use std::collections::HashSet;
use std::sync::LazyLock;

/// HTML void elements: no content model and no separate closing tag.
pub const VOID_ELEMENT_NAMES: &[&str] = &[
    "input", "br", "hr", "img", "meta", "link", "area", "base", "col", "embed", "source", "track",
    "wbr",
];

/// Membership set built once at first use
static VOID_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_ELEMENT_NAMES.iter().copied().collect());

/// Case-insensitive membership test against the void-element set
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(name.to_ascii_lowercase().as_str())
}

/// A classified tag token
#[derive(Debug, Clone)]
pub struct Tag<'a> {
    /// Verbatim token text, `<` through `>`, original casing preserved
    pub raw: &'a str,
    /// Lowercased tag identifier (e.g. `div`)
    pub name: String,
    /// The character immediately after `<` is `/`
    pub is_closing: bool,
    /// The token ends with `/>` or the name is a void element
    pub is_self_closing: bool,
}

impl<'a> Tag<'a> {
    /// Classify a `<...>` token.
    ///
    /// Returns None when no identifier follows the optional `/`; such tokens
    /// carry no structure and must not move the indent level.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let body = raw.strip_prefix('<')?;
        let (is_closing, rest) = match body.strip_prefix('/') {
            Some(after_slash) => (true, after_slash),
            None => (false, body),
        };

        let ident_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if ident_len == 0 {
            return None;
        }

        let name = rest[..ident_len].to_ascii_lowercase();
        let is_self_closing = raw.ends_with("/>") || is_void_element(&name);

        Some(Tag {
            raw,
            name,
            is_closing,
            is_self_closing,
        })
    }
}
