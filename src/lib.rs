pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{GeneratedPlan, Recipe, ShoppingListItem, ShoppingRecipe, UserPreferences};
pub use planner::{build_plan, filter_catalog};
pub use shopping::{generate_list, smart_round};
