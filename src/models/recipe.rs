use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::shopping::Ingredient;

/// Time-of-day category a recipe can be served at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in the order they are filled within a day.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "BREAKFAST",
            MealSlot::Lunch => "LUNCH",
            MealSlot::Dinner => "DINNER",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(format!(
                "unknown meal slot '{}' (expected breakfast, lunch or dinner)",
                other
            )),
        }
    }
}

/// Coarse diet classification. `NONE` on a recipe means no particular diet;
/// `NONE` as a preference means no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryCategory {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Pescatarian,
}

impl DietaryCategory {
    pub const ALL: [DietaryCategory; 4] = [
        DietaryCategory::None,
        DietaryCategory::Vegetarian,
        DietaryCategory::Vegan,
        DietaryCategory::Pescatarian,
    ];

    /// Human-readable name used in prompts and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            DietaryCategory::None => "No restriction",
            DietaryCategory::Vegetarian => "Vegetarian",
            DietaryCategory::Vegan => "Vegan",
            DietaryCategory::Pescatarian => "Pescatarian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A catalog recipe.
///
/// The planner only looks at the identity, calories, slot tags, diet and
/// difficulty. `servings` and `ingredients` are carried so the same catalog
/// can feed the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,

    pub title: String,

    pub calories: f64,

    #[serde(deserialize_with = "deserialize_meal_types")]
    pub meal_types: Vec<MealSlot>,

    #[serde(default)]
    pub dietary_category: DietaryCategory,

    pub difficulty: Difficulty,

    /// People the listed ingredient quantities feed. 0 when unknown.
    #[serde(default)]
    pub servings: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl Recipe {
    /// Whether the recipe may fill the given slot.
    #[inline]
    pub fn is_tagged_for(&self, slot: MealSlot) -> bool {
        self.meal_types.contains(&slot)
    }

    /// Public projection stored in a plan.
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            calories: self.calories,
        }
    }
}

/// Minimal recipe projection referenced by a planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: u32,
    pub title: String,
    pub calories: f64,
}

/// Slot tags arrive either as a JSON array or, from older exports, as a
/// string holding a serialized JSON array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMealTypes {
    List(Vec<MealSlot>),
    Encoded(String),
}

fn deserialize_meal_types<'de, D>(deserializer: D) -> Result<Vec<MealSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawMealTypes::deserialize(deserializer)? {
        RawMealTypes::List(slots) => Ok(slots),
        RawMealTypes::Encoded(raw) => serde_json::from_str(&raw).map_err(serde::de::Error::custom),
    }
}
