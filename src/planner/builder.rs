use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, GeneratedPlan, MealSlot, Recipe, RecipeSummary, UserPreferences};
use crate::planner::constants::DAYS_PER_WEEK;

/// Eligible recipes split by the slots they are tagged for.
///
/// A recipe tagged for several slots appears in each of those pools. Pools
/// are sorted by id so that ties resolve the same way on every run.
#[derive(Debug, Default)]
pub struct SlotPools<'a> {
    breakfast: Vec<&'a Recipe>,
    lunch: Vec<&'a Recipe>,
    dinner: Vec<&'a Recipe>,
}

impl<'a> SlotPools<'a> {
    pub fn partition<I>(recipes: I) -> Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut pools = SlotPools::default();
        for recipe in recipes {
            for slot in MealSlot::ALL {
                if recipe.is_tagged_for(slot) {
                    pools.pool_mut(slot).push(recipe);
                }
            }
        }

        for slot in MealSlot::ALL {
            pools.pool_mut(slot).sort_by_key(|r| r.id);
        }

        pools
    }

    pub fn pool(&self, slot: MealSlot) -> &[&'a Recipe] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    fn pool_mut(&mut self, slot: MealSlot) -> &mut Vec<&'a Recipe> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// Pick the unused recipe whose calories are closest to the target.
///
/// Ties go to the first candidate in pool order.
pub fn find_best_recipe_for_slot<'a>(
    pool: &[&'a Recipe],
    target_calories: f64,
    used_recipe_ids: &HashSet<u32>,
) -> Option<&'a Recipe> {
    let mut best: Option<&'a Recipe> = None;
    let mut smallest_difference = f64::INFINITY;

    for &recipe in pool {
        if used_recipe_ids.contains(&recipe.id) {
            continue;
        }

        let difference = (recipe.calories - target_calories).abs();
        if difference < smallest_difference {
            smallest_difference = difference;
            best = Some(recipe);
        }
    }

    best
}

/// Build a week-long plan from an already filtered pool.
///
/// Every slot gets the unused recipe closest to its calorie target. A recipe
/// is used at most once in the whole week; if a slot cannot be filled the
/// whole generation fails with [`PlannerError::NoEligibleRecipe`].
pub fn build_plan<'a, I>(
    eligible_recipes: I,
    preferences: &UserPreferences,
) -> Result<GeneratedPlan>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let pools = SlotPools::partition(eligible_recipes);
    tracing::debug!(
        breakfast = pools.pool(MealSlot::Breakfast).len(),
        lunch = pools.pool(MealSlot::Lunch).len(),
        dinner = pools.pool(MealSlot::Dinner).len(),
        "partitioned eligible recipes by slot"
    );

    let mut used_recipe_ids: HashSet<u32> = HashSet::new();
    let mut plan = GeneratedPlan {
        days: Vec::with_capacity(usize::from(DAYS_PER_WEEK)),
    };

    for day in 1..=DAYS_PER_WEEK {
        let mut day_plan = DayPlan::new(day);

        for slot in MealSlot::ALL {
            let target_calories = preferences.slot_target(slot);

            let recipe =
                find_best_recipe_for_slot(pools.pool(slot), target_calories, &used_recipe_ids)
                    .ok_or_else(|| {
                        tracing::warn!(day, slot = %slot, "no unused recipe left for slot");
                        PlannerError::NoEligibleRecipe { day, slot }
                    })?;

            tracing::debug!(
                day,
                slot = %slot,
                recipe_id = recipe.id,
                calories = recipe.calories,
                target_calories,
                "slot filled"
            );

            used_recipe_ids.insert(recipe.id);
            day_plan.push_meal(slot, recipe.summary());
        }

        plan.days.push(day_plan);
    }

    tracing::info!(
        meals = plan.meal_count(),
        total_calories = plan.total_calories(),
        "meal plan generated"
    );

    Ok(plan)
}

/// Look up a catalog recipe by id.
pub fn recipe_by_id(catalog: &[Recipe], recipe_id: u32) -> Result<&Recipe> {
    catalog
        .iter()
        .find(|r| r.id == recipe_id)
        .ok_or(PlannerError::RecipeNotFound(recipe_id))
}

/// Replace the recipe in one slot of an existing plan.
///
/// Returns the projection of the recipe that was replaced. The replacement
/// must be tagged for the slot and must not already appear in the plan.
pub fn swap_meal(
    plan: &mut GeneratedPlan,
    day: u8,
    slot: MealSlot,
    replacement: &Recipe,
) -> Result<RecipeSummary> {
    let current = plan
        .day(day)
        .ok_or_else(|| PlannerError::InvalidSwap(format!("day {} is not part of the plan", day)))?
        .meal(slot)
        .ok_or_else(|| PlannerError::InvalidSwap(format!("day {} has no {} meal", day, slot)))?
        .recipe
        .clone();

    if current.id == replacement.id {
        return Ok(current);
    }

    if !replacement.is_tagged_for(slot) {
        return Err(PlannerError::InvalidSwap(format!(
            "'{}' is not tagged for {}",
            replacement.title, slot
        )));
    }

    if plan.contains_recipe(replacement.id) {
        return Err(PlannerError::InvalidSwap(format!(
            "'{}' is already used in this plan",
            replacement.title
        )));
    }

    if let Some(day_plan) = plan.day_mut(day) {
        if let Some(meal) = day_plan.meal_mut(slot) {
            meal.recipe = replacement.summary();
        }
        day_plan.recompute_total();
    }

    tracing::info!(
        day,
        slot = %slot,
        old_recipe_id = current.id,
        new_recipe_id = replacement.id,
        "meal swapped"
    );

    Ok(current)
}

/// Catalog recipes that could replace the meal in a slot.
///
/// Only recipes tagged for the slot and unused in the plan qualify. They are
/// ordered by calorie distance to the current meal, then by id.
pub fn swap_candidates<'a>(
    plan: &GeneratedPlan,
    catalog: &'a [Recipe],
    day: u8,
    slot: MealSlot,
    limit: usize,
) -> Result<Vec<&'a Recipe>> {
    let reference = plan
        .day(day)
        .and_then(|d| d.meal(slot))
        .map(|m| m.recipe.calories)
        .ok_or_else(|| PlannerError::InvalidSwap(format!("day {} has no {} meal", day, slot)))?;

    let mut candidates: Vec<&Recipe> = catalog
        .iter()
        .filter(|r| r.is_tagged_for(slot) && !plan.contains_recipe(r.id))
        .collect();

    candidates.sort_by(|a, b| {
        let da = (a.calories - reference).abs();
        let db = (b.calories - reference).abs();
        match da.partial_cmp(&db) {
            Some(Ordering::Equal) | None => a.id.cmp(&b.id),
            Some(ord) => ord,
        }
    });
    candidates.truncate(limit);

    Ok(candidates)
}
