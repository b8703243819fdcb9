use std::path::Path;

use clap::Parser;

use meal_plan_maker_rs::cli::{Cli, Command};
use meal_plan_maker_rs::error::Result;
use meal_plan_maker_rs::interface::{
    collect_preferences, display_meal_plan, display_preferences, display_recipe_detail,
    display_recipe_list, display_shopping_list, display_swap_candidates, pick_replacement,
    prompt_yes_no,
};
use meal_plan_maker_rs::logging;
use meal_plan_maker_rs::models::{FavoriteToggle, MealSlot, UserPreferences};
use meal_plan_maker_rs::planner::{
    DEFAULT_SWAP_SUGGESTIONS, build_plan, day_name, filter_catalog, recipe_by_id,
    recipes_by_title, swap_candidates, swap_meal, toggle_favorite,
};
use meal_plan_maker_rs::shopping::{generate_list, recipe_ids_for_days, shopping_recipes_for};
use meal_plan_maker_rs::state::{
    favorites_path, load_catalog, load_favorites, load_plan, load_preferences, save_favorites,
    save_plan, save_preferences, write_shopping_csv,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { no_save } => {
            cmd_plan(&cli.catalog, &cli.preferences, &cli.plan_file, no_save)
        }
        Command::Preferences => cmd_preferences(&cli.preferences),
        Command::Swap { day, slot, recipe } => {
            cmd_swap(&cli.catalog, &cli.plan_file, day, slot, recipe)
        }
        Command::Recipes { id, favorites } => {
            cmd_recipes(&cli.catalog, &cli.preferences, id, favorites)
        }
        Command::Favorite { id } => cmd_favorite(&cli.catalog, &cli.preferences, id),
        Command::ShoppingList {
            people,
            days,
            csv,
            json,
        } => cmd_shopping_list(
            &cli.catalog,
            &cli.plan_file,
            people,
            &days,
            csv.as_deref(),
            json,
        ),
    }
}

fn file_missing(path: &Path, what: &str) -> bool {
    if path.exists() {
        return false;
    }
    eprintln!("{} not found: {}", what, path.display());
    true
}

/// Generate a weekly plan from the catalog and saved preferences.
fn cmd_plan(
    catalog_path: &Path,
    preferences_path: &Path,
    plan_path: &Path,
    no_save: bool,
) -> Result<()> {
    if file_missing(catalog_path, "Recipe catalog") {
        return Ok(());
    }
    if file_missing(preferences_path, "Preferences file") {
        eprintln!("Run the 'preferences' command first.");
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    let preferences = load_preferences(preferences_path)?;
    preferences.validate()?;

    println!("Loaded {} recipes", catalog.len());
    display_preferences(&preferences);

    let eligible = filter_catalog(&catalog, &preferences);
    println!("{} recipes match your diet and difficulty", eligible.len());

    let plan = build_plan(eligible, &preferences)?;
    display_meal_plan(&plan);

    if !no_save {
        save_plan(plan_path, &plan)?;
        println!("Plan saved to {}", plan_path.display());
    }

    Ok(())
}

/// Collect preferences interactively and save them.
fn cmd_preferences(preferences_path: &Path) -> Result<()> {
    let current = if preferences_path.exists() {
        load_preferences(preferences_path)?
    } else {
        UserPreferences::default()
    };

    let preferences = collect_preferences(&current)?;
    display_preferences(&preferences);

    if prompt_yes_no("Save these preferences?", true)? {
        save_preferences(preferences_path, &preferences)?;
        println!("Preferences saved to {}", preferences_path.display());
    }

    Ok(())
}

/// Replace one meal of the saved plan.
fn cmd_swap(
    catalog_path: &Path,
    plan_path: &Path,
    day: u8,
    slot: MealSlot,
    recipe_id: Option<u32>,
) -> Result<()> {
    if file_missing(catalog_path, "Recipe catalog") || file_missing(plan_path, "Meal plan") {
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    let mut plan = load_plan(plan_path)?;

    let replacement = match recipe_id {
        Some(id) => recipe_by_id(&catalog, id)?,
        None => {
            let searchable = swap_candidates(&plan, &catalog, day, slot, usize::MAX)?;
            let suggestions = &searchable[..searchable.len().min(DEFAULT_SWAP_SUGGESTIONS)];
            display_swap_candidates(suggestions, day, slot);
            if searchable.is_empty() {
                return Ok(());
            }

            match pick_replacement(suggestions, &searchable)? {
                Some(recipe) => recipe,
                None => {
                    println!("Swap cancelled.");
                    return Ok(());
                }
            }
        }
    };

    let replaced = swap_meal(&mut plan, day, slot, replacement)?;
    println!(
        "{} {}: '{}' replaced with '{}'",
        day_name(day),
        slot,
        replaced.title,
        replacement.title
    );

    save_plan(plan_path, &plan)?;
    println!("Plan saved to {}", plan_path.display());

    Ok(())
}

/// List the catalog, or show one recipe in detail.
fn cmd_recipes(
    catalog_path: &Path,
    preferences_path: &Path,
    recipe_id: Option<u32>,
    favorites_only: bool,
) -> Result<()> {
    if file_missing(catalog_path, "Recipe catalog") {
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    let favorites = load_favorites(favorites_path(preferences_path))?;

    if let Some(id) = recipe_id {
        let recipe = recipe_by_id(&catalog, id)?;
        display_recipe_detail(recipe, favorites.contains(id));
        return Ok(());
    }

    let mut recipes = recipes_by_title(&catalog);
    if favorites_only {
        recipes.retain(|r| favorites.contains(r.id));
    }
    display_recipe_list(&recipes, &favorites);

    Ok(())
}

/// Toggle a recipe in the favorites file next to the preferences.
fn cmd_favorite(catalog_path: &Path, preferences_path: &Path, recipe_id: u32) -> Result<()> {
    if file_missing(catalog_path, "Recipe catalog") {
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    let path = favorites_path(preferences_path);
    let mut favorites = load_favorites(&path)?;

    let outcome = toggle_favorite(&mut favorites, &catalog, recipe_id)?;
    save_favorites(&path, &favorites)?;

    let title = recipe_by_id(&catalog, recipe_id)?.title.as_str();
    match outcome {
        FavoriteToggle::Added => println!("'{}' added to favorites", title),
        FavoriteToggle::Removed => println!("'{}' removed from favorites", title),
    }

    Ok(())
}

/// Aggregate the ingredients of the selected plan days.
fn cmd_shopping_list(
    catalog_path: &Path,
    plan_path: &Path,
    people: u32,
    days: &[u8],
    csv_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if file_missing(catalog_path, "Recipe catalog") || file_missing(plan_path, "Meal plan") {
        return Ok(());
    }

    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;

    let recipe_ids = recipe_ids_for_days(&plan, days);
    let recipes = shopping_recipes_for(&catalog, &recipe_ids);
    let items = generate_list(&recipes, people);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display_shopping_list(&items, people);
    }

    if let Some(path) = csv_path {
        write_shopping_csv(path, &items)?;
        eprintln!("Shopping list exported to {}", path.display());
    }

    Ok(())
}
