//! Output configuration and report rendering.
//!
//! Human-readable printing lives with the CLI commands; this module owns
//! the env-driven output configuration, the semantic color helpers the
//! commands share, and the JSON payloads behind `--json`.
//!
//! Semantic Color Theme:
//!   - Success/Found:  green  (counts, positive answers)
//!   - Error/Missing:  red    (negative answers)
//!   - Info/Reference: cyan   (flavor names)
//!   - Muted:          dimmed (connectors)
//!   - Emphasis:       bold   (section headers)

use std::env;

use colored::Colorize;
use serde::Serialize;

use crate::domain::{PairCombination, TripleCombination};
use crate::error::Result;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: standard env var to disable colors (any value disables)
    /// - `PARFAIT_COLOR`: set to "0" or "false" to disable colors (default: enabled)
    #[must_use]
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let enabled = env::var("PARFAIT_COLOR").map_or(true, |value| color_flag_enabled(&value));
        Self {
            use_colors: !no_color && enabled,
        }
    }
}

/// Parse a `PARFAIT_COLOR`-style flag; anything but "0"/"false" enables.
fn color_flag_enabled(value: &str) -> bool {
    !matches!(value.trim(), "0" | "false" | "FALSE" | "False")
}

/// Apply semantic "success" color (green) to text.
#[must_use]
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
#[must_use]
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
#[must_use]
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply muted styling (dimmed) to connective text.
#[must_use]
pub fn muted(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply section-header emphasis (bold) to text.
#[must_use]
pub fn emphasis(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// JSON payload for the `pairs` command.
#[derive(Debug, Serialize)]
pub struct PairReport<'a> {
    /// Number of combinations found.
    pub count: usize,
    /// The combinations, in discovery order.
    pub combinations: &'a [PairCombination],
}

impl<'a> PairReport<'a> {
    /// Build a report over a discovery-ordered combination list.
    #[must_use]
    pub fn new(combinations: &'a [PairCombination]) -> Self {
        Self {
            count: combinations.len(),
            combinations,
        }
    }
}

/// JSON payload for the `triples` command.
#[derive(Debug, Serialize)]
pub struct TripleReport<'a> {
    /// Number of combinations found.
    pub count: usize,
    /// The combinations, in discovery order.
    pub combinations: &'a [TripleCombination],
}

impl<'a> TripleReport<'a> {
    /// Build a report over a discovery-ordered combination list.
    #[must_use]
    pub fn new(combinations: &'a [TripleCombination]) -> Self {
        Self {
            count: combinations.len(),
            combinations,
        }
    }
}

/// Serialize a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
