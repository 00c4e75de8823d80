//! Roster identity resolution.
//!
//! OCR'd names are noisy ("ShadowF0x" for "ShadowFox"), so each row's name is
//! fuzzy-matched against the caller's roster of canonical IGNs. Only the
//! single best match at or above the cutoff is accepted; anything below it is
//! dropped rather than recorded under a made-up name, so a bad read can never
//! pollute a real player's history.

use strsim::normalized_levenshtein;

/// Similarity ratio in [0, 1] between an OCR'd name and a roster entry.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// The roster entry most similar to `name`, if its similarity reaches the
/// cutoff. Ties keep the entry earlier in roster order.
pub fn closest_match<'a>(name: &str, roster: &'a [String], cutoff: f64) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in roster {
        let score = similarity(name, candidate);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.filter(|&(_, score)| score >= cutoff)
        .map(|(candidate, _)| candidate)
}
