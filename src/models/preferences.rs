use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::recipe::{DietaryCategory, Difficulty, MealSlot};

/// Percentage split of the daily calorie target across the three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl Distribution {
    /// Percentage assigned to a slot.
    pub fn share(&self, slot: MealSlot) -> u32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            breakfast: 30,
            lunch: 40,
            dinner: 30,
        }
    }
}

/// Difficulty preference. `ANY` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        DifficultyLevel::Any,
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Any => "Any",
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }

    /// Whether a recipe of the given difficulty passes this preference.
    pub fn admits(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyLevel::Any => true,
            DifficultyLevel::Easy => difficulty == Difficulty::Easy,
            DifficultyLevel::Medium => difficulty == Difficulty::Medium,
            DifficultyLevel::Hard => difficulty == Difficulty::Hard,
        }
    }
}

/// User preferences driving plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Daily calorie total.
    pub calorie_target: u32,

    pub distribution: Distribution,

    #[serde(default)]
    pub dietary_preference: DietaryCategory,

    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            calorie_target: 2000,
            distribution: Distribution::default(),
            dietary_preference: DietaryCategory::None,
            difficulty_level: DifficultyLevel::Any,
        }
    }
}

impl UserPreferences {
    /// Calories the given slot should aim for.
    pub fn slot_target(&self, slot: MealSlot) -> f64 {
        f64::from(self.calorie_target) * f64::from(self.distribution.share(slot)) / 100.0
    }

    /// Check the constraints the planner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.calorie_target == 0 {
            return Err(PlannerError::InvalidPreferences(
                "calorie target must be a positive number".to_string(),
            ));
        }

        for slot in MealSlot::ALL {
            let share = self.distribution.share(slot);
            if share > 100 {
                return Err(PlannerError::InvalidPreferences(format!(
                    "{} share must be between 0 and 100, got {}",
                    slot, share
                )));
            }
        }

        let total = self.distribution.total();
        if total != 100 {
            return Err(PlannerError::InvalidPreferences(format!(
                "breakfast, lunch and dinner shares must sum to 100, got {}",
                total
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_valid() {
        assert!(UserPreferences::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let prefs = UserPreferences {
            distribution: Distribution {
                breakfast: 30,
                lunch: 30,
                dinner: 30,
            },
            ..Default::default()
        };
        assert!(matches!(
            prefs.validate(),
            Err(PlannerError::InvalidPreferences(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let prefs = UserPreferences {
            calorie_target: 0,
            ..Default::default()
        };
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn test_slot_target() {
        let prefs = UserPreferences {
            calorie_target: 2000,
            distribution: Distribution {
                breakfast: 25,
                lunch: 40,
                dinner: 35,
            },
            ..Default::default()
        };
        assert!((prefs.slot_target(MealSlot::Breakfast) - 500.0).abs() < 1e-9);
        assert!((prefs.slot_target(MealSlot::Lunch) - 800.0).abs() < 1e-9);
        assert!((prefs.slot_target(MealSlot::Dinner) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{"calorieTarget": 1800, "distribution": {"breakfast": 20, "lunch": 45, "dinner": 35}, "dietaryPreference": "VEGETARIAN", "difficultyLevel": "EASY"}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.calorie_target, 1800);
        assert_eq!(prefs.dietary_preference, DietaryCategory::Vegetarian);
        assert_eq!(prefs.difficulty_level, DifficultyLevel::Easy);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_difficulty_level_admits() {
        assert!(DifficultyLevel::Any.admits(Difficulty::Hard));
        assert!(DifficultyLevel::Medium.admits(Difficulty::Medium));
        assert!(!DifficultyLevel::Easy.admits(Difficulty::Hard));
    }
}
