//! Command palette: scoring, registry, ranking and interaction state.
//!
//! Data flow: records are loaded into a `CommandRegistry` when the palette
//! opens; each query change ranks the registry into a shortlist that the
//! controller tracks a selection over.

pub mod controller;
pub mod item;
pub mod ranker;
pub mod registry;
pub mod scorer;

pub use controller::PaletteController;
pub use item::{CommandItem, CommandKind};
pub use ranker::{RankLimits, rank};
pub use registry::{CommandRegistry, NAV_TARGETS, NavTarget, static_items};
pub use scorer::score;
