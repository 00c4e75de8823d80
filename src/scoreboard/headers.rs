//! Header row detection.
//!
//! The results table has a single header row whose column labels come from a
//! closed vocabulary. Each recognized label anchors a stat column to a
//! horizontal pixel position; the header row's vertical position separates
//! the table body from the banner area above it.

use crate::vision::Token;

/// The stat categories of the results table, as labelled on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatColumn {
    Finishes,
    Assists,
    Damage,
    Survived,
    Rescue,
    Recall,
    Rating,
}

impl StatColumn {
    /// Maps a lower-cased token text to a column, if it is a header label.
    pub fn from_label(label: &str) -> Option<StatColumn> {
        match label {
            "finishes" => Some(StatColumn::Finishes),
            "assists" => Some(StatColumn::Assists),
            "damage" => Some(StatColumn::Damage),
            "survived" => Some(StatColumn::Survived),
            "rescue" => Some(StatColumn::Rescue),
            "recall" => Some(StatColumn::Recall),
            "rating" => Some(StatColumn::Rating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatColumn::Finishes => "finishes",
            StatColumn::Assists => "assists",
            StatColumn::Damage => "damage",
            StatColumn::Survived => "survived",
            StatColumn::Rescue => "rescue",
            StatColumn::Recall => "recall",
            StatColumn::Rating => "rating",
        }
    }
}

/// One recognized header label anchored to its horizontal center.
#[derive(Debug, Clone)]
pub struct HeaderColumn {
    pub column: StatColumn,
    pub x_center: f64,
}

/// All recognized header columns plus the header row's vertical position.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    /// Columns in first-seen order; a duplicate label updates the existing
    /// entry's position in place
    pub columns: Vec<HeaderColumn>,
    /// Y-center of the last header token in stream order. Stays 0.0 when no
    /// header was found, which starves the row locator of candidates rather
    /// than failing the parse.
    pub header_y: f64,
}

impl HeaderTable {
    /// The column whose x-center is closest to `x`, with its distance.
    /// Ties keep the earlier column.
    pub fn nearest_column(&self, x: f64) -> Option<(StatColumn, f64)> {
        let mut best: Option<(StatColumn, f64)> = None;
        for header in &self.columns {
            let dist = (header.x_center - x).abs();
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((header.column, dist));
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Scans the token stream for header labels.
///
/// `header_y` is overwritten by every header token encountered, so duplicate
/// or stacked labels resolve to the last one in stream order.
pub fn locate_headers(tokens: &[Token]) -> HeaderTable {
    let mut table = HeaderTable::default();

    for token in tokens {
        let Some(column) = StatColumn::from_label(&token.text.to_lowercase()) else {
            continue;
        };
        let x_center = token.x_center();
        match table.columns.iter_mut().find(|h| h.column == column) {
            Some(existing) => existing.x_center = x_center,
            None => table.columns.push(HeaderColumn { column, x_center }),
        }
        table.header_y = token.y_center();
    }

    table
}
