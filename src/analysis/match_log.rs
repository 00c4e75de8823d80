//! Append-only CSV log of parsed match performances.
//!
//! One row per player per match. Appends happen only after a parse succeeded
//! as a whole, so the log never holds a partial match. Reads skip malformed
//! rows with a warning instead of failing the whole load.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::scoreboard::ScoreboardParse;

/// CSV header row.
const CSV_HEADER: &str =
    "match_date,map_name,team_rank,player_ign,kills,assists,damage,revives,survival_time_sec,recall,rating";

/// One logged performance row.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub match_date: String,
    pub map_name: String,
    pub team_rank: u32,
    pub player_ign: String,
    pub kills: u32,
    pub assists: u32,
    pub damage: u32,
    pub revives: u32,
    pub survival_time_sec: f64,
    pub recall: u32,
    pub rating: f64,
}

/// All rows loaded from a match log CSV.
#[derive(Debug, Clone)]
pub struct MatchLog {
    pub records: Vec<MatchRecord>,
}

impl MatchLog {
    /// Loads the match log, skipping the header and malformed rows.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open match log: {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.context("Failed to read line from match log")?;
            if line_num == 0 || line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    crate::log(&format!(
                        "Warning: Skipping malformed match log row {}: {}",
                        line_num + 1,
                        e
                    ));
                }
            }
        }

        Ok(MatchLog { records })
    }

    fn parse_line(line: &str) -> Result<MatchRecord> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 11 {
            return Err(anyhow!("Expected 11 columns, got {}", parts.len()));
        }

        Ok(MatchRecord {
            match_date: parts[0].to_string(),
            map_name: parts[1].to_string(),
            team_rank: parts[2].parse().context("Invalid team rank")?,
            player_ign: parts[3].to_string(),
            kills: parts[4].parse().context("Invalid kills")?,
            assists: parts[5].parse().context("Invalid assists")?,
            damage: parts[6].parse().context("Invalid damage")?,
            revives: parts[7].parse().context("Invalid revives")?,
            survival_time_sec: parts[8].parse().context("Invalid survival time")?,
            recall: parts[9].parse().context("Invalid recall")?,
            rating: parts[10].parse().context("Invalid rating")?,
        })
    }

    /// All rows for one player, case-insensitively, in log order.
    pub fn player_records(&self, player_ign: &str) -> Vec<&MatchRecord> {
        self.records
            .iter()
            .filter(|r| r.player_ign.eq_ignore_ascii_case(player_ign))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Creates the log with its header if it doesn't exist or is empty.
/// An existing non-empty log is left untouched; one whose header doesn't
/// match draws a warning, since appending to an unrelated CSV misaligns rows.
pub fn init_csv(path: &Path) -> Result<()> {
    if path.exists() {
        let file = File::open(path).context("Failed to open existing match log")?;
        let mut reader = BufReader::new(file);
        let mut first_line = String::new();
        if reader
            .read_line(&mut first_line)
            .context("Failed to read match log header")?
            > 0
        {
            if first_line.trim_end() != CSV_HEADER {
                crate::log(&format!(
                    "Warning: {} does not start with the match log header; appended rows may not align",
                    path.display()
                ));
            }
            return Ok(());
        }
    }

    let mut file = File::create(path).context("Failed to create match log")?;
    writeln!(file, "{}", CSV_HEADER).context("Failed to write match log header")?;
    Ok(())
}

/// Text fields come from OCR and the roster file; a comma in them would
/// shift every later column, so it is replaced before writing.
fn csv_field(value: &str) -> String {
    value.replace(',', ";")
}

/// Appends one parsed match: one row per performance entry, all sharing the
/// match date and metadata. Opens in append mode per write for crash safety.
pub fn append_match(
    path: &Path,
    parse: &ScoreboardParse,
    match_date: DateTime<Local>,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("Failed to open match log for append")?;

    let date = match_date.format("%Y-%m-%dT%H:%M:%S");
    for entry in &parse.performances {
        let line = format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            date,
            csv_field(&parse.metadata.map_name),
            parse.metadata.team_rank,
            csv_field(&entry.canonical_ign),
            entry.kills,
            entry.assists,
            entry.damage,
            entry.revives,
            entry.survival_time_sec,
            entry.recall,
            entry.rating,
        );
        writeln!(file, "{}", line).context("Failed to write match log row")?;
    }

    Ok(())
}
