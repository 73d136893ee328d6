//! hprettier - Pretty-printer for single-line HTML fragments

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{BufReader, Cursor};
use std::path::Path;

use hprettier::process::format_file;
use hprettier::{parse_args, CliArgs, Config, Result};

fn main() {
    let args = parse_args();

    // The formatter is only invoked with both files named; anything less
    // is a usage error.
    let (Some(input), Some(output)) = (args.input.clone(), args.output.clone()) else {
        print_usage();
        std::process::exit(1);
    };

    if !input.exists() {
        println!("Error: File '{}' not found.", input.display());
        std::process::exit(1);
    }

    let outcome =
        build_config(&args, &input).and_then(|config| process_file(&input, &output, &config));

    match outcome {
        Ok(()) => {
            if !args.silent {
                println!(
                    "Successfully formatted HTML from '{}' to '{}'",
                    input.display(),
                    output.display()
                );
            }
        }
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Build configuration from CLI args and optional config file
///
/// If no explicit config file is specified, uses auto-discovery to find
/// config files in parent directories of the input file.
fn build_config(args: &CliArgs, input: &Path) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        // Auto-discover config files from parent directories
        if args.debug {
            let discovered = Config::discover_config_files(input);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", input.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", input.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(input)
    };

    // Override with CLI arguments
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if args.spaces {
        config.use_spaces = true;
    }

    // Print final config in debug mode
    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   indent: {}", config.indent);
        eprintln!("[DEBUG]   use_spaces: {}", config.use_spaces);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Read the input file, format it, and write the result (overwriting)
fn process_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    // Read input file into memory; format_file rejects non-UTF-8 content
    let file_contents = std::fs::read(input)?;

    let reader = BufReader::new(Cursor::new(&file_contents));
    let mut formatted = Vec::new();
    format_file(reader, &mut formatted, config)?;

    std::fs::write(output, &formatted)?;

    Ok(())
}

fn print_usage() {
    println!(
        "hprettier v{} - HTML fragment formatter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: hprettier [OPTIONS] <input.html> <output.html>");
    println!("Example: hprettier input.html output.html");
    println!();
    println!("Reads a single-line HTML fragment from INPUT and writes an");
    println!("indented, one-tag-per-line rendering to OUTPUT (overwriting).");
    println!();
    println!("Options:");
    println!("  -i, --indent <NUM>    Indent characters per nesting level [default: 1]");
    println!("      --spaces          Indent with spaces instead of tabs");
    println!("  -c, --config <FILE>   Config file path (overrides auto-discovery)");
    println!("  -S, --silent          Suppress the success message");
    println!("  -D, --debug           Enable debug output");
    println!("  -h, --help            Print help");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for hprettier.toml in parent directories starting from");
    println!("  the input file up to the root directory, then the home directory.");
    println!("  More specific configs (closer to the file) override less specific ones.");
}
