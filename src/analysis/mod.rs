//! Match log and per-player statistics.
//!
//! This module provides:
//! - Append-only CSV logging of parsed match performances
//! - Per-player aggregates (averages, win rate, recent kills trend)
//! - JSON export of the overview

pub mod export;
pub mod match_log;
pub mod overview;

pub use match_log::MatchLog;
pub use overview::PlayerOverview;

use anyhow::Result;
use std::path::Path;

/// Runs the overview pipeline: load the match log, aggregate one player's
/// records, optionally export JSON.
pub fn generate_overview(
    csv_path: &Path,
    player_ign: &str,
    json_out: Option<&Path>,
) -> Result<PlayerOverview> {
    let log = MatchLog::from_csv(csv_path)?;
    if log.is_empty() {
        crate::log("Match log has no rows yet");
    } else {
        crate::log(&format!("Loaded {} performance rows from log", log.len()));
    }

    let records = log.player_records(player_ign);
    let overview = PlayerOverview::from_records(&records);

    if let Some(path) = json_out {
        export::export_to_json(&overview, path)?;
        crate::log(&format!("Overview JSON saved: {}", path.display()));
    }

    Ok(overview)
}
