use serde::{Deserialize, Serialize};

use crate::models::recipe::Recipe;

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Recipe as seen by the shopping-list aggregator.
///
/// `servings` and `ingredients` are kept loose on purpose: recipes with
/// no ingredient list or a non-positive serving count are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingRecipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub servings: i64,
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl From<&Recipe> for ShoppingRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.title.clone(),
            servings: recipe.servings,
            ingredients: recipe.ingredients.clone(),
        }
    }
}

/// Aggregated, rounded shopping-list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}
