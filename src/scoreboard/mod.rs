//! Scoreboard reconstruction from OCR tokens.
//!
//! Rebuilds the post-match results table from an unordered bag of recognized
//! text fragments. The pipeline is a pure pass over the token stream:
//! locate the header columns, cluster name fragments into player rows,
//! assign numeric values to the nearest row and column, pull rank and map
//! from the banner text, then resolve each row's name against the roster and
//! coerce the cells into typed records.

pub mod cells;
pub mod config;
pub mod headers;
pub mod metadata;
pub mod records;
pub mod resolve;
pub mod rows;

pub use config::ParseConfig;
pub use metadata::MatchMetadata;
pub use records::PerformanceEntry;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::vision::Token;

/// The structured result of one screenshot parse.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardParse {
    pub metadata: MatchMetadata,
    pub performances: Vec<PerformanceEntry>,
}

/// Parses one screenshot's token stream against a roster.
///
/// The first token must be the whole-image text blob (as Vision emits it);
/// its lines feed the metadata extractor while the word-level tokens drive
/// the table reconstruction. Fails on an empty stream and when no row both
/// matched the roster and carried a kill value; every other anomaly degrades
/// to defaults or fewer rows.
pub fn parse_scoreboard(
    tokens: &[Token],
    roster: &[String],
    config: &ParseConfig,
) -> Result<ScoreboardParse> {
    if tokens.is_empty() {
        bail!("OCR could not read any text");
    }

    let header_table = headers::locate_headers(tokens);
    if header_table.is_empty() {
        crate::log("No header labels recognized; no stat values will be assigned");
    }
    let metadata = metadata::extract_metadata(&tokens[0].text, config)?;

    let mut player_rows = rows::locate_rows(tokens, header_table.header_y, config);
    cells::assign_cells(tokens, &mut player_rows, &header_table, config);

    let performances = records::build_records(&player_rows, roster, config)?;

    crate::log(&format!(
        "Parsed {} player(s) on {} (rank #{})",
        performances.len(),
        metadata.map_name,
        metadata.team_rank
    ));

    Ok(ScoreboardParse {
        metadata,
        performances,
    })
}
