use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Result of toggling a recipe in the favorites set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Recipe ids the user marked as favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorites {
    #[serde(default)]
    pub recipe_ids: BTreeSet<u32>,
}

impl Favorites {
    pub fn contains(&self, recipe_id: u32) -> bool {
        self.recipe_ids.contains(&recipe_id)
    }

    /// Add the recipe, or remove it if it is already a favorite.
    pub fn toggle(&mut self, recipe_id: u32) -> FavoriteToggle {
        if self.recipe_ids.remove(&recipe_id) {
            FavoriteToggle::Removed
        } else {
            self.recipe_ids.insert(recipe_id);
            FavoriteToggle::Added
        }
    }

    pub fn len(&self) -> usize {
        self.recipe_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_ids.is_empty()
    }
}
