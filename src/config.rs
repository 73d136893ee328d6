//! Configuration management for hprettier.
//!
//! This module provides the [`Config`] struct which controls the indent unit.
//! Configuration can be loaded from:
//! - TOML files (`hprettier.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the file
//! being formatted up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the config file looked up during auto-discovery
const CONFIG_FILE_NAME: &str = "hprettier.toml";

/// Home directory from the environment, if one is set
fn home_dir() -> Option<PathBuf> {
    // HOME on Unix; USERPROFILE covers Windows shells without HOME
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

// Serde default functions
fn default_indent() -> usize {
    1
}

/// Main configuration struct for hprettier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of indent characters per nesting level (default: 1)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Indent with spaces instead of tabs (default: false)
    #[serde(default)]
    pub use_spaces: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub use_spaces: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: 1,
            use_spaces: false,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        None
    }

    /// The indent unit repeated once per nesting level.
    ///
    /// One tab by default; `use_spaces` switches to spaces. `indent` controls
    /// how many characters make up a single level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.use_spaces {
            " ".repeat(self.indent)
        } else {
            "\t".repeat(self.indent)
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_partial(&Self::load_partial(path)?);
        Ok(config)
    }

    /// Parse one config file into a partial overlay
    fn load_partial(path: &Path) -> anyhow::Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.use_spaces {
            self.use_spaces = v;
        }
    }

    /// Locate `hprettier.toml` files that apply to `start_path`.
    ///
    /// Walks from the path's directory up to the filesystem root, then checks
    /// the home directory. The returned list is ordered most specific first:
    /// nearest ancestor, farther ancestors, home.
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        // Anchor the walk at a real directory: the path itself, its parent
        // for a file, or the current directory when neither exists
        let anchor = if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            match start_path.parent() {
                Some(parent) if parent.is_dir() => Some(parent.to_path_buf()),
                _ => std::env::current_dir().ok(),
            }
        };

        let mut found = Vec::new();
        if let Some(dir) = anchor {
            for ancestor in dir.ancestors() {
                let candidate = ancestor.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    found.push(candidate);
                }
            }
        }
        if let Some(home) = home_dir() {
            let candidate = home.join(CONFIG_FILE_NAME);
            if candidate.is_file() && !found.contains(&candidate) {
                found.push(candidate);
            }
        }
        found
    }

    /// Merge configuration from every discovered config file.
    ///
    /// Files apply least specific first, so an `hprettier.toml` next to the
    /// input overrides one in the home directory. Unreadable or unparseable
    /// files are skipped with a warning rather than aborting the run.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_path).iter().rev() {
            match Self::load_partial(path) {
                Ok(partial) => config.apply_partial(&partial),
                Err(e) => eprintln!("Warning: skipping config {}: {e}", path.display()),
            }
        }
        config
    }
}
