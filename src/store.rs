//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashMap;

use crate::models::{Category, MenuItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Menus fetched so far, keyed by category
    pub menus: HashMap<Category, Vec<MenuItem>>,
    /// Category whose menu board is currently shown
    pub current_category: Category,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            menus: Category::ALL.iter().map(|&c| (c, Vec::new())).collect(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace one category's menu with the server's list
pub fn store_replace_menu(store: &AppStore, category: Category, items: Vec<MenuItem>) {
    store.menus().write().insert(category, items);
}

/// Snapshot of one category's menu
pub fn store_menu_items(store: &AppStore, category: Category) -> Vec<MenuItem> {
    store
        .menus()
        .read()
        .get(&category)
        .cloned()
        .unwrap_or_default()
}

/// Point the view at another category
pub fn store_switch_category(store: &AppStore, category: Category) {
    store.current_category().set(category);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: u32, name: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            is_sold_out: false,
        }
    }

    #[test]
    fn test_new_state_has_all_categories_empty() {
        let state = AppState::new();
        assert_eq!(state.menus.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(state.menus[&category].is_empty());
        }
        assert_eq!(state.current_category, Category::Espresso);
    }

    #[test]
    fn test_replace_keeps_server_order() {
        let mut state = AppState::new();
        let items = vec![menu(2, "Latte"), menu(1, "Americano"), menu(3, "Mocha")];
        state.menus.insert(Category::Espresso, items.clone());

        assert_eq!(state.menus[&Category::Espresso], items);
    }

    #[test]
    fn test_replace_leaves_other_categories_untouched() {
        let mut state = AppState::new();
        state.menus.insert(Category::Espresso, vec![menu(1, "Latte")]);

        for category in Category::ALL.iter().skip(1) {
            assert!(state.menus[category].is_empty());
        }
    }
}
