//! HTML fragment tokenization.
//!
//! This module provides the infrastructure for splitting raw markup into tokens:
//! - [`tag`]: Tag token classification and the void-element table
//! - [`stream`]: [`TokenStream`] walks the input and yields tag, text, and
//!   pass-through tokens
//!
//! The tokenizer has exactly two lexical states, driven by whether the cursor
//! currently sits on a `<`. There is no backtracking and no recovery pass;
//! anything that does not classify as a tag is handed through verbatim.

pub mod stream;
pub mod tag;

pub use stream::{Token, TokenStream};
pub use tag::{is_void_element, Tag, VOID_ELEMENT_NAMES};
