pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, fuzzy_matches, pick_replacement, prompt_calorie_target,
    prompt_dietary_preference, prompt_difficulty_level, prompt_distribution, prompt_yes_no,
};
pub use render::{
    display_meal_plan, display_preferences, display_recipe_detail, display_recipe_list,
    display_shopping_list, display_swap_candidates, format_quantity, preferences_summary,
};
