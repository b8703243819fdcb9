use crate::models::{DietaryCategory, Recipe, UserPreferences};

/// Whether a recipe passes the dietary and difficulty preferences.
///
/// A `NONE` dietary preference and an `ANY` difficulty level disable the
/// respective check. Otherwise the recipe's category must match exactly.
pub fn matches_preferences(recipe: &Recipe, preferences: &UserPreferences) -> bool {
    let diet_ok = preferences.dietary_preference == DietaryCategory::None
        || recipe.dietary_category == preferences.dietary_preference;

    diet_ok && preferences.difficulty_level.admits(recipe.difficulty)
}

/// Reduce a catalog to the pool eligible for planning, keeping catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Recipe], preferences: &UserPreferences) -> Vec<&'a Recipe> {
    let eligible: Vec<&Recipe> = catalog
        .iter()
        .filter(|r| matches_preferences(r, preferences))
        .collect();

    tracing::debug!(
        catalog = catalog.len(),
        eligible = eligible.len(),
        "filtered catalog by diet and difficulty"
    );

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, DifficultyLevel, MealSlot};

    fn recipe(id: u32, diet: DietaryCategory, difficulty: Difficulty) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {}", id),
            calories: 400.0,
            meal_types: vec![MealSlot::Lunch],
            dietary_category: diet,
            difficulty,
            servings: 2,
            ingredients: None,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe(1, DietaryCategory::None, Difficulty::Easy),
            recipe(2, DietaryCategory::Vegetarian, Difficulty::Medium),
            recipe(3, DietaryCategory::Vegan, Difficulty::Easy),
            recipe(4, DietaryCategory::Vegetarian, Difficulty::Hard),
        ]
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let catalog = catalog();
        let prefs = UserPreferences::default();
        assert_eq!(filter_catalog(&catalog, &prefs).len(), 4);
    }

    #[test]
    fn test_dietary_filter_is_exact() {
        let catalog = catalog();
        let prefs = UserPreferences {
            dietary_preference: DietaryCategory::Vegetarian,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_catalog(&catalog, &prefs).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_combined_filters() {
        let catalog = catalog();
        let prefs = UserPreferences {
            dietary_preference: DietaryCategory::Vegetarian,
            difficulty_level: DifficultyLevel::Medium,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_catalog(&catalog, &prefs).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_difficulty_filter_alone() {
        let catalog = catalog();
        let prefs = UserPreferences {
            difficulty_level: DifficultyLevel::Easy,
            ..Default::default()
        };
        let ids: Vec<u32> = filter_catalog(&catalog, &prefs).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
