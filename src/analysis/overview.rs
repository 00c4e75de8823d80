//! Per-player aggregate statistics over the match log.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::match_log::MatchRecord;

/// How many recent matches feed the kills trend series.
const RECENT_WINDOW: usize = 20;

/// Kills-per-match series for the player's most recent matches, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecentPerformance {
    /// Match dates formatted as "Aug 30"
    pub labels: Vec<String>,
    pub kills_data: Vec<u32>,
}

/// Aggregates for one player across their logged matches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerOverview {
    pub total_matches: usize,
    pub avg_kills: f64,
    pub avg_damage: f64,
    pub avg_assists: f64,
    pub avg_revives: f64,
    pub avg_survival_time_sec: f64,
    pub avg_recall: f64,
    pub avg_rating: f64,
    /// Percentage of matches finished at team rank 1
    pub win_rate: f64,
    pub recent_performance: RecentPerformance,
}

impl PlayerOverview {
    /// Computes the overview from one player's records in log order.
    /// No records yields an all-zero overview, not an error.
    pub fn from_records(records: &[&MatchRecord]) -> Self {
        let total = records.len();
        if total == 0 {
            return PlayerOverview::default();
        }

        let wins = records.iter().filter(|r| r.team_rank == 1).count();
        let recent = &records[total.saturating_sub(RECENT_WINDOW)..];

        PlayerOverview {
            total_matches: total,
            avg_kills: round2(mean(records, |r| r.kills as f64)),
            avg_damage: round2(mean(records, |r| r.damage as f64)),
            avg_assists: round2(mean(records, |r| r.assists as f64)),
            avg_revives: round2(mean(records, |r| r.revives as f64)),
            avg_survival_time_sec: round2(mean(records, |r| r.survival_time_sec)),
            avg_recall: round2(mean(records, |r| r.recall as f64)),
            avg_rating: round2(mean(records, |r| r.rating)),
            win_rate: round2(wins as f64 / total as f64 * 100.0),
            recent_performance: RecentPerformance {
                labels: recent.iter().map(|r| date_label(&r.match_date)).collect(),
                kills_data: recent.iter().map(|r| r.kills).collect(),
            },
        }
    }
}

fn mean(records: &[&MatchRecord], value: impl Fn(&MatchRecord) -> f64) -> f64 {
    records.iter().map(|r| value(r)).sum::<f64>() / records.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// "2026-08-30T21:15:00" -> "Aug 30"; unparseable dates pass through as-is.
fn date_label(match_date: &str) -> String {
    NaiveDateTime::parse_from_str(match_date, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_else(|_| match_date.to_string())
}
