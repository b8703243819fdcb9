pub mod aggregator;
pub mod rounding;

pub use aggregator::{
    capitalize_first, generate_list, normalize_name, recipe_ids_for_days, shopping_recipes_for,
};
pub use rounding::{is_whole_unit, smart_round};
