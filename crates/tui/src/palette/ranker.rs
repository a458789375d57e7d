//! Query ranking over the registry.
//!
//! Invariants:
//! - Whitespace-only queries browse by priority; anything else searches by score.
//! - Sorting is stable, so equal keys keep registry order and repeated calls agree.
//! - Output never exceeds the active limit.

use keydeck_config::PaletteConfig;
use keydeck_config::constants::{DEFAULT_BROWSE_LIMIT, DEFAULT_SEARCH_LIMIT};

use crate::palette::item::CommandItem;
use crate::palette::scorer::score;

/// Row caps for the two palette views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankLimits {
    /// Empty query
    pub browse: usize,
    /// Non-empty query
    pub search: usize,
}

impl Default for RankLimits {
    fn default() -> Self {
        Self {
            browse: DEFAULT_BROWSE_LIMIT,
            search: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl From<&PaletteConfig> for RankLimits {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            browse: config.browse_limit,
            search: config.search_limit,
        }
    }
}

/// Produce the shortlist for `query`.
pub fn rank(query: &str, items: &[CommandItem], limits: RankLimits) -> Vec<CommandItem> {
    if query.trim().is_empty() {
        let mut browse: Vec<&CommandItem> = items.iter().collect();
        browse.sort_by(|a, b| b.priority.cmp(&a.priority));
        return browse.into_iter().take(limits.browse).cloned().collect();
    }

    let mut scored: Vec<(f64, &CommandItem)> = items
        .iter()
        .filter_map(|item| {
            let s = score(query, &item.searchable_text());
            (s > 0.0).then_some((s, item))
        })
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| sb.total_cmp(sa).then_with(|| b.priority.cmp(&a.priority)));

    scored
        .into_iter()
        .take(limits.search)
        .map(|(_, item)| item.clone())
        .collect()
}
