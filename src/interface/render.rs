use crate::models::{
    Difficulty, Favorites, GeneratedPlan, MealSlot, Recipe, ShoppingListItem, UserPreferences,
};
use crate::planner::constants::day_name;

fn slot_label(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "Breakfast",
        MealSlot::Lunch => "Lunch",
        MealSlot::Dinner => "Dinner",
    }
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

fn favorite_marker(is_favorite: bool) -> &'static str {
    if is_favorite { "*" } else { " " }
}

/// Format a shopping quantity without a trailing ".0".
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{:.2}", quantity)
    }
}

/// Display a weekly plan, one block per day.
pub fn display_meal_plan(plan: &GeneratedPlan) {
    if plan.days.is_empty() {
        println!("The meal plan is empty.");
        return;
    }

    println!();
    println!("=== Weekly Meal Plan ===");

    let max_title_len = plan
        .days
        .iter()
        .flat_map(|d| d.meals.iter().map(|m| m.recipe.title.len()))
        .max()
        .unwrap_or(10);

    for day in &plan.days {
        println!();
        println!("{} (day {})", day_name(day.day_of_week), day.day_of_week);

        for meal in &day.meals {
            println!(
                "  {:<9} {:<width$} {:>5.0} kcal  [#{}]",
                slot_label(meal.meal_type),
                meal.recipe.title,
                meal.recipe.calories,
                meal.recipe.id,
                width = max_title_len
            );
        }

        println!(
            "  {:<9} {:>width$.0} kcal",
            "Total",
            day.total_calories,
            width = max_title_len + 6
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Meals planned: {}", plan.meal_count());
    println!("Weekly calories: {:.0}", plan.total_calories());
    println!(
        "Average per day: {:.0}",
        plan.total_calories() / plan.days.len() as f64
    );
    println!();
}

/// One-line summary of the preferences a plan is generated from.
pub fn preferences_summary(preferences: &UserPreferences) -> String {
    format!(
        "Target {} kcal/day: breakfast {}%, lunch {}%, dinner {}% | diet: {} | difficulty: {}",
        preferences.calorie_target,
        preferences.distribution.breakfast,
        preferences.distribution.lunch,
        preferences.distribution.dinner,
        preferences.dietary_preference.label(),
        preferences.difficulty_level.label()
    )
}

pub fn display_preferences(preferences: &UserPreferences) {
    println!("{}", preferences_summary(preferences));
}

/// Display a shopping list as an aligned checklist.
pub fn display_shopping_list(items: &[ShoppingListItem], people_count: u32) {
    if items.is_empty() {
        println!("Shopping list is empty (no recipes with ingredients selected).");
        return;
    }

    println!();
    println!(
        "=== Shopping List ({} people, {} items) ===",
        people_count,
        items.len()
    );
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        println!(
            "  [ ] {:<width$}  {:>7} {}",
            item.name,
            format_quantity(item.quantity),
            item.unit,
            width = max_name_len
        );
    }

    println!();
}

/// Display replacement suggestions for a slot.
pub fn display_swap_candidates(candidates: &[&Recipe], day: u8, slot: MealSlot) {
    if candidates.is_empty() {
        println!(
            "No unused {} recipes left for {}.",
            slot_label(slot).to_lowercase(),
            day_name(day)
        );
        return;
    }

    println!();
    println!(
        "Alternatives for {} {}:",
        day_name(day),
        slot_label(slot).to_lowercase()
    );
    for recipe in candidates {
        println!(
            "  #{:<5} {} - {:.0} kcal",
            recipe.id, recipe.title, recipe.calories
        );
    }
    println!();
}

/// Display catalog recipes as a table. Favorites are marked with `*`.
pub fn display_recipe_list(recipes: &[&Recipe], favorites: &Favorites) {
    if recipes.is_empty() {
        println!("No recipes to show.");
        return;
    }

    let max_title_len = recipes.iter().map(|r| r.title.len()).max().unwrap_or(10);

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();
    for recipe in recipes {
        println!(
            "{} #{:<5} {:<width$}  {:<6}  {:>5.0} kcal",
            favorite_marker(favorites.contains(recipe.id)),
            recipe.id,
            recipe.title,
            difficulty_label(recipe.difficulty),
            recipe.calories,
            width = max_title_len
        );
    }
    println!();
}

/// Display one recipe with its servings and ingredient list.
pub fn display_recipe_detail(recipe: &Recipe, is_favorite: bool) {
    let slots: Vec<&str> = recipe.meal_types.iter().map(|s| slot_label(*s)).collect();

    println!();
    println!("=== #{} {} ===", recipe.id, recipe.title);
    if is_favorite {
        println!("* Favorite");
    }
    println!("Calories:   {:.0} kcal", recipe.calories);
    println!("Difficulty: {}", difficulty_label(recipe.difficulty));
    println!("Diet:       {}", recipe.dietary_category.label());
    println!("Meals:      {}", slots.join(", "));
    if recipe.servings > 0 {
        println!("Servings:   {}", recipe.servings);
    } else {
        println!("Servings:   unknown");
    }

    println!();
    match recipe.ingredients.as_deref() {
        Some(ingredients) if !ingredients.is_empty() => {
            println!("Ingredients:");
            for ingredient in ingredients {
                println!(
                    "  - {} {} {}",
                    format_quantity(ingredient.quantity),
                    ingredient.unit,
                    ingredient.name
                );
            }
        }
        _ => println!("No ingredient list."),
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(200.0), "200");
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(2.5), "2.50");
    }

    #[test]
    fn test_preferences_summary_uses_labels() {
        let summary = preferences_summary(&UserPreferences::default());
        assert!(summary.contains("diet: No restriction"));
        assert!(summary.contains("difficulty: Any"));
        assert!(!summary.contains("None"));
    }
}
