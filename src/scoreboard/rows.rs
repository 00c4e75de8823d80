//! Player row detection.
//!
//! Player names sit in the left half of the table, below the header row.
//! OCR often emits several overlapping fragments for one visual line
//! (shadowed fonts, clan tags), so candidates within a vertical tolerance of
//! an already-accepted row are dropped rather than merged.

use std::collections::HashMap;

use super::config::ParseConfig;
use super::headers::StatColumn;
use crate::vision::Token;

/// UI chrome words that OCR picks up around the table but that are never
/// player names. "krafion" is the usual misread of the Krafton logo.
const NAME_BLACKLIST: &[&str] = &[
    "player", "weapon", "report", "mvp", "sss", "back", "share", "krafion", "bgmi",
];

/// One table line holding a player's OCR'd name and its assigned cells.
#[derive(Debug, Clone)]
pub struct PlayerRow {
    /// Name exactly as OCR read it; resolved against the roster later
    pub raw_ign: String,
    pub y_center: f64,
    /// Raw cell text per column, filled in by the cell assigner
    pub cells: HashMap<StatColumn, String>,
}

fn is_name_candidate(token: &Token, header_y: f64, config: &ParseConfig) -> bool {
    if !token.text.chars().any(char::is_alphabetic) {
        return false;
    }
    let lower = token.text.to_lowercase();
    if NAME_BLACKLIST.contains(&lower.as_str()) || StatColumn::from_label(&lower).is_some() {
        return false;
    }
    if token.text.split_whitespace().count() > 2 {
        return false;
    }
    token.x_center() < config.name_x_cutoff && token.y_center() > header_y + config.header_margin
}

/// Scans the token stream for player rows, in stream order.
///
/// A candidate becomes a new row only if no accepted row lies within the
/// vertical dedup tolerance; later fragments of the same line are dropped.
pub fn locate_rows(tokens: &[Token], header_y: f64, config: &ParseConfig) -> Vec<PlayerRow> {
    let mut rows: Vec<PlayerRow> = Vec::new();

    for token in tokens {
        if !is_name_candidate(token, header_y, config) {
            continue;
        }
        let y_center = token.y_center();
        if rows
            .iter()
            .any(|row| (row.y_center - y_center).abs() < config.row_dedup_tolerance)
        {
            continue;
        }
        rows.push(PlayerRow {
            raw_ign: token.text.clone(),
            y_center,
            cells: HashMap::new(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ParseConfig {
        ParseConfig::default()
    }

    #[test]
    fn test_locate_rows_basic() {
        let tokens = vec![
            Token::from_box("Player1", 10, 110, 80, 130),
            Token::from_box("Player2", 10, 160, 80, 180),
        ];

        let rows = locate_rows(&tokens, 50.0, &cfg());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].raw_ign, "Player1");
        assert_eq!(rows[0].y_center, 120.0);
        assert_eq!(rows[1].raw_ign, "Player2");
        assert!(rows[0].cells.is_empty());
    }

    #[test]
    fn test_near_duplicate_fragments_collapse() {
        // Same visual line read twice, 8px apart — first discovered wins
        let tokens = vec![
            Token::from_box("ShadowFox", 10, 110, 90, 130),
            Token::from_box("ShadowF0x", 10, 118, 90, 138),
        ];

        let rows = locate_rows(&tokens, 50.0, &cfg());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw_ign, "ShadowFox");
    }

    #[test]
    fn test_numeric_tokens_rejected() {
        let tokens = vec![Token::from_box("1158", 10, 110, 80, 130)];
        assert!(locate_rows(&tokens, 50.0, &cfg()).is_empty());
    }

    #[test]
    fn test_blacklist_and_header_labels_rejected() {
        let tokens = vec![
            Token::from_box("MVP", 10, 110, 80, 130),
            Token::from_box("Finishes", 10, 160, 80, 180),
            Token::from_box("weapon", 10, 210, 80, 230),
        ];
        assert!(locate_rows(&tokens, 50.0, &cfg()).is_empty());
    }

    #[test]
    fn test_right_half_tokens_rejected() {
        // x-center 600 is past the name column cutoff
        let tokens = vec![Token::from_box("Erangel", 560, 110, 640, 130)];
        assert!(locate_rows(&tokens, 50.0, &cfg()).is_empty());
    }

    #[test]
    fn test_tokens_above_body_rejected() {
        // y-center 55 is inside the header margin of header_y 50
        let tokens = vec![
            Token::from_box("Player1", 10, 45, 80, 65),
            Token::from_box("Player2", 10, 110, 80, 130),
        ];

        let rows = locate_rows(&tokens, 50.0, &cfg());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw_ign, "Player2");
    }

    #[test]
    fn test_long_fragments_rejected() {
        let tokens = vec![Token::from_box(
            "Winner Winner Chicken Dinner",
            10,
            110,
            400,
            130,
        )];
        assert!(locate_rows(&tokens, 50.0, &cfg()).is_empty());
    }

    #[test]
    fn test_two_word_name_accepted() {
        let tokens = vec![Token::from_box("TSM Ghatak", 10, 110, 120, 130)];
        let rows = locate_rows(&tokens, 50.0, &cfg());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw_ign, "TSM Ghatak");
    }
}
