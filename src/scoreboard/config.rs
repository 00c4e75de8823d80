//! Tunable tolerances for the scoreboard parser.
//!
//! The defaults are calibrated for 1600x720-class BGMI result screenshots.
//! A config.json can override individual values when a device's capture
//! resolution shifts the table geometry.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Distance tolerances and thresholds used by the layout pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct ParseConfig {
    /// Name tokens must have their x-center left of this (player column
    /// occupies the left half of the capture)
    #[serde(default = "default_name_x_cutoff")]
    pub name_x_cutoff: f64,
    /// Name tokens must sit at least this many pixels below the header row
    #[serde(default = "default_header_margin")]
    pub header_margin: f64,
    /// Two name tokens closer than this vertically are the same table line
    #[serde(default = "default_row_dedup_tolerance")]
    pub row_dedup_tolerance: f64,
    /// Maximum vertical distance between a stat value and its row
    #[serde(default = "default_row_assign_tolerance")]
    pub row_assign_tolerance: f64,
    /// Maximum horizontal distance between a stat value and its column
    #[serde(default = "default_column_assign_tolerance")]
    pub column_assign_tolerance: f64,
    /// Minimum similarity for accepting a roster match of an OCR'd name
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
    /// Rank lines longer than this are banner text, not the "#N" marker
    #[serde(default = "default_rank_line_max_len")]
    pub rank_line_max_len: usize,
}

fn default_name_x_cutoff() -> f64 {
    500.0
}

fn default_header_margin() -> f64 {
    10.0
}

fn default_row_dedup_tolerance() -> f64 {
    15.0
}

fn default_row_assign_tolerance() -> f64 {
    30.0
}

fn default_column_assign_tolerance() -> f64 {
    100.0
}

fn default_fuzzy_cutoff() -> f64 {
    0.7
}

fn default_rank_line_max_len() -> usize {
    15
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            name_x_cutoff: default_name_x_cutoff(),
            header_margin: default_header_margin(),
            row_dedup_tolerance: default_row_dedup_tolerance(),
            row_assign_tolerance: default_row_assign_tolerance(),
            column_assign_tolerance: default_column_assign_tolerance(),
            fuzzy_cutoff: default_fuzzy_cutoff(),
            rank_line_max_len: default_rank_line_max_len(),
        }
    }
}

/// Loads configuration from the given JSON file, or returns defaults.
/// A missing or malformed file falls back to defaults with a warning.
pub fn load_config(path: Option<&Path>) -> ParseConfig {
    let Some(path) = path else {
        return ParseConfig::default();
    };

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                crate::log(&format!("Parse config loaded from {}", path.display()));
                config
            }
            Err(e) => {
                crate::log(&format!(
                    "Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
                ParseConfig::default()
            }
        },
        Err(e) => {
            crate::log(&format!(
                "Failed to read {}: {}. Using defaults.",
                path.display(),
                e
            ));
            ParseConfig::default()
        }
    }
}
