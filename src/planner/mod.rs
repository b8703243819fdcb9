pub mod builder;
pub mod catalog;
pub mod constants;
pub mod filter;

pub use builder::{
    SlotPools, build_plan, find_best_recipe_for_slot, recipe_by_id, swap_candidates, swap_meal,
};
pub use catalog::{recipes_by_title, toggle_favorite};
pub use constants::*;
pub use filter::{filter_catalog, matches_preferences};
