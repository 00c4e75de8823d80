//! Match metadata extraction from the full recognized text.
//!
//! Team rank and map name come from the banner area, not the table grid, so
//! they are pulled line-by-line from the whole-image text blob. Both fall
//! back to defaults; a missing banner never fails the parse.

use anyhow::Result;
use regex::Regex;
use serde::Serialize;

use super::config::ParseConfig;

/// Line marking the ranked-mode banner, e.g. "Ranked Classic - Erangel".
const MAP_LINE_MARKER: &str = "Ranked Classic";

/// Rank used when no "#N" line is present in the capture.
const UNKNOWN_RANK: u32 = 99;

#[derive(Debug, Clone, Serialize)]
pub struct MatchMetadata {
    pub team_rank: u32,
    pub map_name: String,
}

/// Extracts team rank and map name from the full recognized text.
///
/// The rank line is the first short line containing "#<digits>". OCR reads
/// the digit 1 as the letter I often enough that the correction is applied
/// before matching, so "#I2" resolves to rank 12. The map name is whatever
/// follows the last "-" on the ranked-mode banner line.
pub fn extract_metadata(full_text: &str, config: &ParseConfig) -> Result<MatchMetadata> {
    let rank_pattern = Regex::new(r"#\d+")?;
    let digits_pattern = Regex::new(r"\d+")?;

    let mut team_rank = UNKNOWN_RANK;
    for line in full_text.lines() {
        if line.chars().count() >= config.rank_line_max_len {
            continue;
        }
        let corrected = line.replace('I', "1");
        if !rank_pattern.is_match(&corrected) {
            continue;
        }
        if let Some(digits) = digits_pattern.find(&corrected)
            && let Ok(rank) = digits.as_str().parse::<u32>()
        {
            team_rank = rank;
            break;
        }
    }

    let map_name = full_text
        .lines()
        .find(|line| line.contains(MAP_LINE_MARKER))
        .and_then(|line| line.rsplit('-').next())
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(MatchMetadata {
        team_rank,
        map_name,
    })
}
