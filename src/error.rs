use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No eligible recipe for {slot} on day {day}. Try widening the criteria.")]
    NoEligibleRecipe { day: u8, slot: MealSlot },

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(u32),

    #[error("Invalid swap: {0}")]
    InvalidSwap(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
