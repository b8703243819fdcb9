use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::models::MealSlot;

/// MealPlanMaker: weekly meal plans matched to calorie targets, plus shopping lists.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json", global = true)]
    pub catalog: PathBuf,

    /// Path to the user preferences JSON file.
    #[arg(short, long, default_value = "preferences.json", global = true)]
    pub preferences: PathBuf,

    /// Path where the generated plan is saved and loaded.
    #[arg(long, default_value = "meal_plan.json", global = true)]
    pub plan_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan from the catalog and preferences.
    Plan {
        /// Do not save the generated plan.
        #[arg(long)]
        no_save: bool,
    },

    /// Set calorie target, meal distribution, diet and difficulty interactively.
    Preferences,

    /// Replace the recipe of one meal in the saved plan.
    Swap {
        /// Day of the week (1 = Monday ... 7 = Sunday).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        day: u8,

        /// Meal slot: breakfast, lunch or dinner.
        #[arg(long)]
        slot: MealSlot,

        /// Replacement recipe id. Prompts for a choice when omitted.
        #[arg(long)]
        recipe: Option<u32>,
    },

    /// Browse the recipe catalog, sorted by title.
    Recipes {
        /// Show one recipe with its servings and ingredients.
        #[arg(long)]
        id: Option<u32>,

        /// List only favorite recipes.
        #[arg(long)]
        favorites: bool,
    },

    /// Add a recipe to favorites, or remove it if it is already one.
    Favorite {
        /// Recipe id.
        id: u32,
    },

    /// Build a shopping list from the saved plan.
    ShoppingList {
        /// Number of people to shop for.
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        people: u32,

        /// Days of the plan to include (comma-separated, default all).
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=7))]
        days: Vec<u8>,

        /// Also export the list to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the list as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { no_save: false }
    }
}
