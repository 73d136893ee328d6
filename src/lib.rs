//! hprettier - Pretty-printer for single-line HTML fragments
//!
//! Reflows whitespace-collapsed HTML into an indented, one-tag-per-line rendering.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use process::{format_file, format_fragment};
