//! Menu List Component
//!
//! Renders the active category's menu rows and the visible item count.

use leptos::prelude::*;

use crate::components::MenuRow;
use crate::store::{store_menu_items, use_app_store, AppStateStoreFields};

/// Count label text, e.g. "총 3 개"
pub fn format_menu_count(count: usize) -> String {
    format!("총 {} 개", count)
}

/// Menu list with count label for the active category
#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_app_store();

    let menu_items = move || store_menu_items(&store, store.current_category().get());

    view! {
        <div class="menu-board">
            <span class="mt-2 menu-count">{move || format_menu_count(menu_items().len())}</span>
            <ul id="menu-list" class="mt-3 pl-0">
                <For
                    each=menu_items
                    key=|item| (item.id, item.name.clone(), item.is_sold_out)
                    children=move |item| {
                        view! { <MenuRow item=item /> }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_menu_count() {
        assert_eq!(format_menu_count(0), "총 0 개");
        assert_eq!(format_menu_count(1), "총 1 개");
    }
}
