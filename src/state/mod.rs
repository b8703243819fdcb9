mod persistence;

pub use persistence::{
    favorites_path, load_catalog, load_favorites, load_plan, load_preferences, save_favorites,
    save_plan, save_preferences, write_shopping_csv,
};
