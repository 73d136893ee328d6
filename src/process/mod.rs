//! Fragment formatting pipeline.
//!
//! This module orchestrates the single formatting pass:
//!
//! **Normalize:**
//! - Trim the fragment and collapse whitespace runs sitting between tags
//!
//! **Scan and emit:**
//! - Walk the token stream, tracking nesting depth
//! - Each tag lands on its own line behind the current indent prefix
//! - Text and unclassified tokens ride on the line already open
//!
//! **Finalize:**
//! - Guarantee exactly one trailing newline on non-empty output
//!
//! The main entry points are [`format_fragment`] (pure, string to string)
//! and [`format_file`] which wraps it over a reader/writer pair.

pub mod pipeline;

pub use pipeline::{format_file, format_fragment};
