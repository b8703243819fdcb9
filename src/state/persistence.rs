use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{Favorites, GeneratedPlan, Recipe, ShoppingListItem, UserPreferences};

const FAVORITES_FILE_NAME: &str = "favorites.json";

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the recipe catalog from a JSON file.
///
/// Deduplicates by id: the last occurrence wins but keeps the position of
/// the first one.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = read_json(path)?;

    let mut positions: HashMap<u32, usize> = HashMap::new();
    let mut catalog: Vec<Recipe> = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        match positions.get(&recipe.id) {
            Some(&idx) => catalog[idx] = recipe,
            None => {
                positions.insert(recipe.id, catalog.len());
                catalog.push(recipe);
            }
        }
    }

    tracing::debug!(recipes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<UserPreferences> {
    read_json(path)
}

pub fn save_preferences<P: AsRef<Path>>(path: P, preferences: &UserPreferences) -> Result<()> {
    write_json(path, preferences)
}

pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<GeneratedPlan> {
    read_json(path)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &GeneratedPlan) -> Result<()> {
    write_json(path, plan)
}

/// Favorites live next to the preferences file.
pub fn favorites_path(preferences_path: &Path) -> PathBuf {
    preferences_path.with_file_name(FAVORITES_FILE_NAME)
}

/// Load favorites, or an empty set if none were saved yet.
pub fn load_favorites<P: AsRef<Path>>(path: P) -> Result<Favorites> {
    if !path.as_ref().exists() {
        return Ok(Favorites::default());
    }
    read_json(path)
}

pub fn save_favorites<P: AsRef<Path>>(path: P, favorites: &Favorites) -> Result<()> {
    write_json(path, favorites)
}

/// Write a shopping list as CSV with a `name,quantity,unit` header.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, items: &[ShoppingListItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
