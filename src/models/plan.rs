use serde::{Deserialize, Serialize};

use crate::models::recipe::{MealSlot, RecipeSummary};

/// A single planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub meal_type: MealSlot,
    pub recipe: RecipeSummary,
}

/// One day of a plan: breakfast, lunch and dinner in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1 = Monday, ..., 7 = Sunday.
    pub day_of_week: u8,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
}

impl DayPlan {
    pub fn new(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            meals: Vec::with_capacity(MealSlot::ALL.len()),
            total_calories: 0.0,
        }
    }

    /// Append a meal and account for its calories.
    pub fn push_meal(&mut self, meal_type: MealSlot, recipe: RecipeSummary) {
        self.total_calories += recipe.calories;
        self.meals.push(Meal { meal_type, recipe });
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals.iter().find(|m| m.meal_type == slot)
    }

    pub fn meal_mut(&mut self, slot: MealSlot) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|m| m.meal_type == slot)
    }

    /// Recompute the day total from its meals.
    pub fn recompute_total(&mut self) {
        self.total_calories = self.meals.iter().map(|m| m.recipe.calories).sum();
    }
}

/// A generated week of meals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub days: Vec<DayPlan>,
}

impl GeneratedPlan {
    pub fn day(&self, day_of_week: u8) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day_of_week == day_of_week)
    }

    pub fn day_mut(&mut self, day_of_week: u8) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.day_of_week == day_of_week)
    }

    /// Recipe ids in plan order (day, then slot).
    pub fn recipe_ids(&self) -> Vec<u32> {
        self.days
            .iter()
            .flat_map(|d| d.meals.iter().map(|m| m.recipe.id))
            .collect()
    }

    pub fn contains_recipe(&self, recipe_id: u32) -> bool {
        self.days
            .iter()
            .any(|d| d.meals.iter().any(|m| m.recipe.id == recipe_id))
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.days.iter().map(|d| d.total_calories).sum()
    }
}
