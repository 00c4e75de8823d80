//! Stat value assignment.
//!
//! Each numeric token is classified independently: nearest player row by
//! vertical distance, then nearest header column by horizontal distance,
//! both subject to a tolerance. Tokens outside tolerance are OCR noise from
//! outside the table grid and are discarded. A later token landing in an
//! occupied cell overwrites it.

use super::config::ParseConfig;
use super::headers::HeaderTable;
use super::rows::PlayerRow;
use crate::vision::Token;

fn digits_with_one_dot(text: &str) -> bool {
    let stripped = text.replacen('.', "", 1);
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// True for non-negative decimal numbers, optionally with a trailing `m`
/// minutes suffix as the "survived" column uses ("19.3m").
pub fn is_stat_value(text: &str) -> bool {
    if digits_with_one_dot(text) {
        return true;
    }
    match text.to_lowercase().strip_suffix('m') {
        Some(stem) => digits_with_one_dot(stem),
        None => false,
    }
}

/// Index of the row vertically closest to `y`, with its distance.
/// Ties keep the earlier row.
fn nearest_row(rows: &[PlayerRow], y: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, row) in rows.iter().enumerate() {
        let dist = (row.y_center - y).abs();
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best
}

/// Assigns every stat-value token in the stream to a row and column.
pub fn assign_cells(
    tokens: &[Token],
    rows: &mut [PlayerRow],
    headers: &HeaderTable,
    config: &ParseConfig,
) {
    for token in tokens {
        if !is_stat_value(&token.text) {
            continue;
        }
        let x = token.x_center();
        let y = token.y_center();

        let Some((row_idx, row_dist)) = nearest_row(rows, y) else {
            continue;
        };
        if row_dist > config.row_assign_tolerance {
            continue;
        }

        let Some((column, column_dist)) = headers.nearest_column(x) else {
            continue;
        };
        if column_dist > config.column_assign_tolerance {
            continue;
        }

        rows[row_idx].cells.insert(column, token.text.clone());
    }
}
