use std::collections::{HashMap, HashSet};

use crate::models::{GeneratedPlan, Recipe, ShoppingListItem, ShoppingRecipe};
use crate::shopping::rounding::smart_round;

/// Running total for one normalized ingredient name.
#[derive(Debug)]
struct AggregatedEntry {
    total_quantity: f64,
    unit: String,
}

/// Merge key for an ingredient name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a shopping list for `people_count` people.
///
/// Quantities are scaled from each recipe's serving count, summed by
/// case-insensitive ingredient name and rounded once per final entry.
/// Ingredients sharing a name are assumed to share a unit; the first unit
/// seen is kept. Recipes without an ingredient list or with a non-positive
/// serving count are skipped.
pub fn generate_list(recipes: &[ShoppingRecipe], people_count: u32) -> Vec<ShoppingListItem> {
    let mut aggregated: HashMap<String, AggregatedEntry> = HashMap::new();

    for recipe in recipes {
        let ingredients = match recipe.ingredients.as_ref() {
            Some(ingredients) if recipe.servings > 0 => ingredients,
            _ => {
                tracing::warn!(
                    recipe_id = recipe.id,
                    servings = recipe.servings,
                    "skipping recipe without ingredients or servings"
                );
                continue;
            }
        };

        let scale_factor = f64::from(people_count) / recipe.servings as f64;

        for ingredient in ingredients {
            let scaled_quantity = ingredient.quantity * scale_factor;
            aggregated
                .entry(normalize_name(&ingredient.name))
                .and_modify(|entry| entry.total_quantity += scaled_quantity)
                .or_insert_with(|| AggregatedEntry {
                    total_quantity: scaled_quantity,
                    unit: ingredient.unit.clone(),
                });
        }
    }

    let mut list: Vec<ShoppingListItem> = aggregated
        .into_iter()
        .map(|(name, entry)| ShoppingListItem {
            name: capitalize_first(&name),
            quantity: smart_round(entry.total_quantity, &entry.unit),
            unit: entry.unit,
        })
        .collect();

    list.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        recipes = recipes.len(),
        items = list.len(),
        people_count,
        "shopping list aggregated"
    );

    list
}

/// Recipe ids of the selected plan days, in plan order and without repeats.
///
/// An empty selection means the whole plan.
pub fn recipe_ids_for_days(plan: &GeneratedPlan, days: &[u8]) -> Vec<u32> {
    let mut seen = HashSet::new();

    plan.days
        .iter()
        .filter(|d| days.is_empty() || days.contains(&d.day_of_week))
        .flat_map(|d| d.meals.iter().map(|m| m.recipe.id))
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Resolve recipe ids against the catalog, dropping ids it does not know.
pub fn shopping_recipes_for(catalog: &[Recipe], recipe_ids: &[u32]) -> Vec<ShoppingRecipe> {
    recipe_ids
        .iter()
        .filter_map(|id| {
            let found = catalog.iter().find(|r| r.id == *id);
            if found.is_none() {
                tracing::warn!(recipe_id = id, "recipe missing from catalog");
            }
            found.map(ShoppingRecipe::from)
        })
        .collect()
}
