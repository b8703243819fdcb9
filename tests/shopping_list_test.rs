#[macro_use]
extern crate assert_float_eq;

use std::fs;

use tempfile::tempdir;

use meal_plan_maker_rs::models::{
    DietaryCategory, Difficulty, Ingredient, MealSlot, Recipe, ShoppingRecipe, UserPreferences,
};
use meal_plan_maker_rs::planner::build_plan;
use meal_plan_maker_rs::shopping::{generate_list, recipe_ids_for_days, shopping_recipes_for};
use meal_plan_maker_rs::state::{load_catalog, load_plan, save_plan, write_shopping_csv};

fn shopping_recipe(id: u32, servings: i64, ingredients: Vec<Ingredient>) -> ShoppingRecipe {
    ShoppingRecipe {
        id,
        name: format!("Recipe {}", id),
        servings,
        ingredients: Some(ingredients),
    }
}

fn catalog_recipe(id: u32, calories: f64, slots: &[MealSlot], ingredient: Ingredient) -> Recipe {
    Recipe {
        id,
        title: format!("Recipe {}", id),
        calories,
        meal_types: slots.to_vec(),
        dietary_category: DietaryCategory::None,
        difficulty: Difficulty::Easy,
        servings: 2,
        ingredients: Some(vec![ingredient]),
    }
}

#[test]
fn test_quantities_scale_with_people() {
    let recipes = vec![shopping_recipe(1, 2, vec![Ingredient::new("Riso", 100.0, "g")])];

    let list = generate_list(&recipes, 4);

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Riso");
    assert_float_absolute_eq!(list[0].quantity, 200.0, 1e-9);
    assert_eq!(list[0].unit, "g");
}

#[test]
fn test_discrete_units_merge_then_round_up() {
    let recipes = vec![
        shopping_recipe(1, 1, vec![Ingredient::new("Uova", 2.3, "uova")]),
        shopping_recipe(2, 1, vec![Ingredient::new("uova ", 1.1, "uova")]),
    ];

    let list = generate_list(&recipes, 1);

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Uova");
    assert_float_absolute_eq!(list[0].quantity, 4.0, 1e-9);
}

#[test]
fn test_rounding_boundaries_through_the_list() {
    let recipes = vec![
        shopping_recipe(
            1,
            1,
            vec![
                Ingredient::new("Burro", 10.0, "g"),
                Ingredient::new("Farina", 10.1, "g"),
                Ingredient::new("Latte", 100.0, "ml"),
                Ingredient::new("Pasta", 100.5, "g"),
                Ingredient::new("Sale", 0.3, "qb"),
            ],
        ),
    ];

    let list = generate_list(&recipes, 1);
    let quantity = |name: &str| {
        list.iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
            .unwrap()
    };

    assert_float_absolute_eq!(quantity("Burro"), 10.0, 1e-9);
    assert_float_absolute_eq!(quantity("Farina"), 15.0, 1e-9);
    assert_float_absolute_eq!(quantity("Latte"), 100.0, 1e-9);
    assert_float_absolute_eq!(quantity("Pasta"), 110.0, 1e-9);
    assert_float_absolute_eq!(quantity("Sale"), 1.0, 1e-9);
}

#[test]
fn test_empty_input_gives_empty_list() {
    assert!(generate_list(&[], 3).is_empty());
}

#[test]
fn test_recipes_without_servings_or_ingredients_are_skipped() {
    let recipes = vec![
        shopping_recipe(1, 0, vec![Ingredient::new("Riso", 100.0, "g")]),
        shopping_recipe(2, -1, vec![Ingredient::new("Riso", 100.0, "g")]),
        ShoppingRecipe {
            id: 3,
            name: "No ingredients".to_string(),
            servings: 2,
            ingredients: None,
        },
        shopping_recipe(4, 2, vec![Ingredient::new("Pane", 50.0, "g")]),
    ];

    let list = generate_list(&recipes, 2);

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Pane");
    assert_float_absolute_eq!(list[0].quantity, 50.0, 1e-9);
}

#[test]
fn test_list_is_sorted_by_name() {
    let recipes = vec![shopping_recipe(
        1,
        1,
        vec![
            Ingredient::new("zucchine", 200.0, "g"),
            Ingredient::new("aglio", 1.0, "spicchio"),
            Ingredient::new("Mozzarella", 125.0, "g"),
        ],
    )];

    let names: Vec<String> = generate_list(&recipes, 1)
        .into_iter()
        .map(|item| item.name)
        .collect();

    assert_eq!(names, vec!["Aglio", "Mozzarella", "Zucchine"]);
}

#[test]
fn test_catalog_to_plan_to_shopping_list() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("recipes.json");
    let plan_path = dir.path().join("meal_plan.json");
    let csv_path = dir.path().join("shopping.csv");

    let mut recipes: Vec<Recipe> = (1..=7)
        .map(|id| {
            catalog_recipe(
                id,
                350.0 + f64::from(id),
                &[MealSlot::Breakfast],
                Ingredient::new("Egg", 1.0, "egg"),
            )
        })
        .collect();
    recipes.extend((1..=14).map(|i| {
        catalog_recipe(
            100 + i,
            600.0 + f64::from(i),
            &[MealSlot::Lunch, MealSlot::Dinner],
            Ingredient::new("Riso", 80.0, "g"),
        )
    }));
    fs::write(&catalog_path, serde_json::to_string(&recipes).unwrap()).unwrap();

    let catalog = load_catalog(&catalog_path).unwrap();
    let plan = build_plan(&catalog, &UserPreferences::default()).unwrap();
    save_plan(&plan_path, &plan).unwrap();
    let plan = load_plan(&plan_path).unwrap();

    // Whole week, 3 people: 7 * 1.5 eggs and 14 * 120 g of rice.
    let ids = recipe_ids_for_days(&plan, &[]);
    assert_eq!(ids.len(), 21);
    let week = generate_list(&shopping_recipes_for(&catalog, &ids), 3);
    assert_eq!(week.len(), 2);
    assert_eq!(week[0].name, "Egg");
    assert_float_absolute_eq!(week[0].quantity, 11.0, 1e-9);
    assert_eq!(week[1].name, "Riso");
    assert_float_absolute_eq!(week[1].quantity, 1680.0, 1e-9);

    // Monday only.
    let ids = recipe_ids_for_days(&plan, &[1]);
    assert_eq!(ids.len(), 3);
    let monday = generate_list(&shopping_recipes_for(&catalog, &ids), 3);
    assert_float_absolute_eq!(monday[0].quantity, 2.0, 1e-9);
    assert_float_absolute_eq!(monday[1].quantity, 240.0, 1e-9);

    write_shopping_csv(&csv_path, &week).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "name,quantity,unit");
    assert!(lines[1].starts_with("Egg,"));
    assert!(lines[2].starts_with("Riso,"));
}
