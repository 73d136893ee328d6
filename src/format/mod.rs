//! Output shaping for the tag stream.
//!
//! This module contains the indentation logic:
//! - [`indenter`]: Tracks nesting depth as tags open and close and renders
//!   the indent prefix for each emitted line

pub mod indenter;

pub use indenter::IndentTracker;
