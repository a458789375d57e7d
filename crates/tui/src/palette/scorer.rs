//! Fuzzy relevance scoring for palette queries.
//!
//! Invariants:
//! - Case-insensitive on both arguments.
//! - A contiguous substring always scores exactly `SUBSTRING_SCORE`.
//! - Complete spread-out matches are not capped: from nine query characters on
//!   they reach or pass `SUBSTRING_SCORE`.
//! - Any single shared in-order character yields a nonzero score; filtering
//!   out weak matches is the ranker's job (it drops only zero).

/// Score for a contiguous substring match.
pub const SUBSTRING_SCORE: f64 = 100.0;

/// Bonus for consuming every query character in order.
pub const COMPLETION_BONUS: f64 = 50.0;

/// Maximum per-character score, earned by the first query character.
const HIT_WEIGHT: f64 = 10.0;

/// Score `query` against `text`.
///
/// Each in-order hit earns `(remaining / len) * 10`, where `remaining` counts
/// the query characters still unmatched including the current one, so early
/// hits are worth more.
pub fn score(query: &str, text: &str) -> f64 {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text.contains(&query) {
        return SUBSTRING_SCORE;
    }

    let query: Vec<char> = query.chars().collect();
    let len = query.len() as f64;
    let mut cursor = 0;
    let mut total = 0.0;

    for c in text.chars() {
        if cursor == query.len() {
            break;
        }
        if c == query[cursor] {
            let remaining = (query.len() - cursor) as f64;
            total += remaining / len * HIT_WEIGHT;
            cursor += 1;
        }
    }

    if cursor == query.len() {
        total += COMPLETION_BONUS;
    }
    total
}
