pub mod favorites;
pub mod plan;
pub mod preferences;
pub mod recipe;
pub mod shopping;

pub use favorites::{FavoriteToggle, Favorites};
pub use plan::{DayPlan, GeneratedPlan, Meal};
pub use preferences::{DifficultyLevel, Distribution, UserPreferences};
pub use recipe::{DietaryCategory, Difficulty, MealSlot, Recipe, RecipeSummary};
pub use shopping::{Ingredient, ShoppingListItem, ShoppingRecipe};
