//! Performance record construction.
//!
//! Turns matched rows into typed entries. Count cells are parsed as floats
//! and truncated, matching how the capture renders whole numbers with
//! decimal artifacts ("4.0"). A row that fails coercion is skipped with a
//! warning; only a parse producing no entries at all is an error.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::config::ParseConfig;
use super::headers::StatColumn;
use super::resolve;
use super::rows::PlayerRow;

/// One player's stats for one match, under their canonical roster name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub canonical_ign: String,
    pub kills: u32,
    pub assists: u32,
    pub damage: u32,
    pub revives: u32,
    pub recall: u32,
    pub rating: f64,
    pub survival_time_sec: f64,
}

/// Resolves each row against the roster and coerces its cells.
///
/// Rows without a "finishes" cell are layout noise, not players. Rows whose
/// name has no acceptable roster match are dropped. Errors only when nothing
/// survives, since a match result with zero players is useless to the caller.
pub fn build_records(
    rows: &[PlayerRow],
    roster: &[String],
    config: &ParseConfig,
) -> Result<Vec<PerformanceEntry>> {
    let mut entries = Vec::new();

    for row in rows {
        if !row.cells.contains_key(&StatColumn::Finishes) {
            continue;
        }
        let Some(canonical_ign) = resolve::closest_match(&row.raw_ign, roster, config.fuzzy_cutoff)
        else {
            continue;
        };
        match build_entry(row, canonical_ign) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                crate::log(&format!(
                    "Skipping invalid stats for {}: {}",
                    canonical_ign, e
                ));
            }
        }
    }

    if entries.is_empty() {
        bail!("Could not parse or match any valid player stats");
    }
    Ok(entries)
}

fn build_entry(row: &PlayerRow, canonical_ign: &str) -> Result<PerformanceEntry> {
    Ok(PerformanceEntry {
        canonical_ign: canonical_ign.to_string(),
        kills: count_cell(row, StatColumn::Finishes)?,
        assists: count_cell(row, StatColumn::Assists)?,
        damage: count_cell(row, StatColumn::Damage)?,
        revives: count_cell(row, StatColumn::Rescue)?,
        recall: count_cell(row, StatColumn::Recall)?,
        rating: float_cell(row, StatColumn::Rating)?,
        survival_time_sec: survival_seconds(row),
    })
}

/// Parses a count cell as float-then-truncate; a missing cell is 0.
fn count_cell(row: &PlayerRow, column: StatColumn) -> Result<u32> {
    Ok(float_cell(row, column)? as u32)
}

fn float_cell(row: &PlayerRow, column: StatColumn) -> Result<f64> {
    match row.cells.get(&column) {
        None => Ok(0.0),
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid {} value '{}'", column.as_str(), raw)),
    }
}

/// Converts the "survived" cell ("19.3m") to seconds. Absent or malformed
/// values degrade to 0.0 rather than failing the row.
fn survival_seconds(row: &PlayerRow) -> f64 {
    let raw = row
        .cells
        .get(&StatColumn::Survived)
        .map(String::as_str)
        .unwrap_or("0m");
    if !raw.contains('m') {
        return 0.0;
    }
    raw.replace('m', "")
        .parse::<f64>()
        .map_or(0.0, |minutes| minutes * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(ign: &str, cells: &[(StatColumn, &str)]) -> PlayerRow {
        PlayerRow {
            raw_ign: ign.to_string(),
            y_center: 100.0,
            cells: cells
                .iter()
                .map(|(c, v)| (*c, v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_row() {
        let rows = vec![row(
            "Player1",
            &[
                (StatColumn::Finishes, "5"),
                (StatColumn::Assists, "2"),
                (StatColumn::Damage, "430"),
                (StatColumn::Rescue, "1"),
                (StatColumn::Recall, "0"),
                (StatColumn::Rating, "87.5"),
                (StatColumn::Survived, "19.3m"),
            ],
        )];

        let entries =
            build_records(&rows, &roster(&["Player1"]), &ParseConfig::default()).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.canonical_ign, "Player1");
        assert_eq!(entry.kills, 5);
        assert_eq!(entry.assists, 2);
        assert_eq!(entry.damage, 430);
        assert_eq!(entry.revives, 1);
        assert_eq!(entry.recall, 0);
        assert_eq!(entry.rating, 87.5);
        assert_eq!(entry.survival_time_sec, 19.3 * 60.0);
    }

    #[test]
    fn test_missing_cells_default_to_zero() {
        let rows = vec![row("Player1", &[(StatColumn::Finishes, "3")])];

        let entries =
            build_records(&rows, &roster(&["Player1"]), &ParseConfig::default()).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.kills, 3);
        assert_eq!(entry.assists, 0);
        assert_eq!(entry.damage, 0);
        assert_eq!(entry.rating, 0.0);
        assert_eq!(entry.survival_time_sec, 0.0);
    }

    #[test]
    fn test_decimal_count_truncates() {
        let rows = vec![row("Player1", &[(StatColumn::Finishes, "4.0")])];
        let entries =
            build_records(&rows, &roster(&["Player1"]), &ParseConfig::default()).unwrap();
        assert_eq!(entries[0].kills, 4);
    }

    #[test]
    fn test_row_without_finishes_is_noise() {
        let rows = vec![
            row("Player1", &[(StatColumn::Damage, "430")]),
            row("Player2", &[(StatColumn::Finishes, "2")]),
        ];

        let entries = build_records(
            &rows,
            &roster(&["Player1", "Player2"]),
            &ParseConfig::default(),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical_ign, "Player2");
    }

    #[test]
    fn test_unmatched_row_dropped() {
        let rows = vec![
            row("zzz999", &[(StatColumn::Finishes, "2")]),
            row("ShadowF0x", &[(StatColumn::Finishes, "5")]),
        ];

        let entries = build_records(
            &rows,
            &roster(&["ShadowFox", "NightHawk"]),
            &ParseConfig::default(),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical_ign, "ShadowFox");
    }

    #[test]
    fn test_coercion_failure_skips_row_only() {
        let rows = vec![
            row("Player1", &[(StatColumn::Finishes, "5x")]),
            row("Player2", &[(StatColumn::Finishes, "2")]),
        ];

        let entries = build_records(
            &rows,
            &roster(&["Player1", "Player2"]),
            &ParseConfig::default(),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical_ign, "Player2");
    }

    #[test]
    fn test_zero_entries_fails() {
        let rows = vec![row("Player1", &[(StatColumn::Damage, "430")])];
        let err = build_records(&rows, &roster(&["Player1"]), &ParseConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("match any valid player stats"));
    }

    #[test]
    fn test_survival_without_suffix_is_zero() {
        // A bare "19.3" in the survived column means the suffix was lost;
        // the value is not trusted
        let rows = vec![row(
            "Player1",
            &[
                (StatColumn::Finishes, "1"),
                (StatColumn::Survived, "19.3"),
            ],
        )];
        let entries =
            build_records(&rows, &roster(&["Player1"]), &ParseConfig::default()).unwrap();
        assert_eq!(entries[0].survival_time_sec, 0.0);
    }

    #[test]
    fn test_survival_malformed_is_zero() {
        let rows = vec![row(
            "Player1",
            &[
                (StatColumn::Finishes, "1"),
                (StatColumn::Survived, "19.3M"),
            ],
        )];
        let entries =
            build_records(&rows, &roster(&["Player1"]), &ParseConfig::default()).unwrap();
        assert_eq!(entries[0].survival_time_sec, 0.0);
    }
}
