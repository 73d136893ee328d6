//! Command-line interface for hprettier.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// HTML file to read
    pub input: Option<PathBuf>,

    /// Destination file for the formatted result
    pub output: Option<PathBuf>,

    /// Number of indent characters per nesting level
    pub indent: Option<usize>,

    /// Indent with spaces instead of tabs
    pub spaces: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Silent mode (suppress the success message)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("hprettier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Indentation pretty-printer for single-line HTML fragments")
        .arg(
            Arg::new("input")
                .help("HTML file to format")
                .value_name("INPUT")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .help("Destination file for the formatted result")
                .value_name("OUTPUT")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Indent characters per nesting level [default: 1]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("spaces")
                .long("spaces")
                .help("Indent with spaces instead of tabs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (suppress the success message)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from `std::env::args`
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an explicit argument list (used by tests)
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        indent: matches.get_one::<usize>("indent").copied(),
        spaces: matches.get_flag("spaces"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
