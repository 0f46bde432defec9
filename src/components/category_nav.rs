//! Category Navigation Component
//!
//! Top navigation bar for switching between the five menu categories.

use leptos::prelude::*;

use crate::models::Category;
use crate::store::{store_switch_category, use_app_store, AppStateStoreFields};

/// Category navigation bar
#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="d-flex justify-center flex-wrap">
            {Category::ALL
                .iter()
                .map(|&category| {
                    let is_active = move || store.current_category().get() == category;
                    let button_class = move || {
                        if is_active() {
                            "cafe-category-name active"
                        } else {
                            "cafe-category-name"
                        }
                    };

                    view! {
                        <button
                            type="button"
                            class=button_class
                            data-category-name=category.as_str()
                            on:click=move |_| store_switch_category(&store, category)
                        >
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
