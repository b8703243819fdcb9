use crate::error::Result;
use crate::models::{FavoriteToggle, Favorites, Recipe};
use crate::planner::builder::recipe_by_id;

/// Catalog recipes sorted by title, ties broken by id.
pub fn recipes_by_title(catalog: &[Recipe]) -> Vec<&Recipe> {
    let mut recipes: Vec<&Recipe> = catalog.iter().collect();
    recipes.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
    recipes
}

/// Toggle a catalog recipe in the favorites set.
///
/// Fails with `RecipeNotFound` when the id is not in the catalog, leaving
/// the set untouched.
pub fn toggle_favorite(
    favorites: &mut Favorites,
    catalog: &[Recipe],
    recipe_id: u32,
) -> Result<FavoriteToggle> {
    let recipe = recipe_by_id(catalog, recipe_id)?;
    let outcome = favorites.toggle(recipe.id);

    tracing::info!(recipe_id, outcome = ?outcome, "favorite toggled");
    Ok(outcome)
}
