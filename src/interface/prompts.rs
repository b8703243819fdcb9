use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{
    DietaryCategory, DifficultyLevel, Distribution, MealSlot, Recipe, UserPreferences,
};
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

fn prompt_number(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a whole number", input)))
}

/// Prompt for the daily calorie target.
pub fn prompt_calorie_target(default: u32) -> Result<u32> {
    let target = prompt_number("Daily calorie target (kcal)", default)?;
    if target == 0 {
        return Err(PlannerError::InvalidInput(
            "Calorie target must be positive".to_string(),
        ));
    }
    Ok(target)
}

/// Prompt for the percentage of calories assigned to each slot.
pub fn prompt_distribution(default: &Distribution) -> Result<Distribution> {
    println!("Split the daily calories across meals (percentages must sum to 100).");
    let breakfast = prompt_number("Breakfast %", default.share(MealSlot::Breakfast))?;
    let lunch = prompt_number("Lunch %", default.share(MealSlot::Lunch))?;
    let dinner = prompt_number("Dinner %", default.share(MealSlot::Dinner))?;

    Ok(Distribution {
        breakfast,
        lunch,
        dinner,
    })
}

pub fn prompt_dietary_preference(current: DietaryCategory) -> Result<DietaryCategory> {
    let labels: Vec<&str> = DietaryCategory::ALL.iter().map(|c| c.label()).collect();
    let default = DietaryCategory::ALL
        .iter()
        .position(|c| *c == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(DietaryCategory::ALL[selection])
}

pub fn prompt_difficulty_level(current: DifficultyLevel) -> Result<DifficultyLevel> {
    let labels: Vec<&str> = DifficultyLevel::ALL.iter().map(|d| d.label()).collect();
    let default = DifficultyLevel::ALL
        .iter()
        .position(|d| *d == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Recipe difficulty")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(DifficultyLevel::ALL[selection])
}

/// Collect a full set of preferences, starting from `current` as defaults.
pub fn collect_preferences(current: &UserPreferences) -> Result<UserPreferences> {
    let preferences = UserPreferences {
        calorie_target: prompt_calorie_target(current.calorie_target)?,
        distribution: prompt_distribution(&current.distribution)?,
        dietary_preference: prompt_dietary_preference(current.dietary_preference)?,
        difficulty_level: prompt_difficulty_level(current.difficulty_level)?,
    };
    preferences.validate()?;
    Ok(preferences)
}

/// Recipes whose title resembles `query`, best match first.
pub fn fuzzy_matches<'a>(query: &str, recipes: &[&'a Recipe]) -> Vec<(&'a Recipe, f64)> {
    let query = query.trim().to_lowercase();

    let mut matches: Vec<(&Recipe, f64)> = recipes
        .iter()
        .map(|r| (*r, jaro_winkler(&r.title.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

fn recipe_label(recipe: &Recipe) -> String {
    format!("{} ({:.0} kcal)", recipe.title, recipe.calories)
}

/// Search a replacement by typed title.
fn search_replacement<'a>(searchable: &[&'a Recipe]) -> Result<Option<&'a Recipe>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Type a recipe title (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Exact match first (case-insensitive)
        if let Some(recipe) = searchable
            .iter()
            .find(|r| r.title.to_lowercase() == input.to_lowercase())
        {
            return Ok(Some(*recipe));
        }

        let candidates = fuzzy_matches(input, searchable);

        if candidates.is_empty() {
            println!("No matching recipe found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let recipe = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", recipe.title))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(recipe));
            }
            continue;
        }

        let options: Vec<&Recipe> = candidates.iter().take(5).map(|(r, _)| *r).collect();
        let mut labels: Vec<String> = options.iter().map(|r| recipe_label(r)).collect();
        labels.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&labels)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection]));
        }
    }
}

/// Let the user choose a replacement from the suggestions or by title search.
///
/// `searchable` holds every recipe that may legally fill the slot.
pub fn pick_replacement<'a>(
    suggestions: &[&'a Recipe],
    searchable: &[&'a Recipe],
) -> Result<Option<&'a Recipe>> {
    let mut labels: Vec<String> = suggestions.iter().map(|r| recipe_label(r)).collect();
    labels.push("Search by title".to_string());
    labels.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Choose a replacement")
        .items(&labels)
        .default(0)
        .interact()?;

    if selection < suggestions.len() {
        Ok(Some(suggestions[selection]))
    } else if selection == suggestions.len() {
        search_replacement(searchable)
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
