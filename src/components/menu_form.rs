//! Menu Form Component
//!
//! Form for adding a new menu item to the active category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dialog;
use crate::store::{use_app_store, AppStateStoreFields};

/// Trimmed menu name, or None when nothing was entered
pub fn normalize_menu_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Form for adding menu items (submit button or Enter)
#[component]
pub fn MenuForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (menu_name, set_menu_name) = signal(String::new());

    let add_menu = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = match normalize_menu_name(&menu_name.get()) {
            Some(name) => name,
            None => {
                dialog::alert("값을 입력해주세요");
                return;
            }
        };
        let category = store.current_category().get();

        spawn_local(async move {
            if api::create_menu(category, &name).await.is_ok() {
                set_menu_name.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <form id="menu-form" class="d-flex items-center" on:submit=add_menu>
            <input
                id="menu-name"
                type="text"
                class="w-100 mr-2"
                placeholder="메뉴 이름"
                prop:value=move || menu_name.get()
                on:input=move |ev| set_menu_name.set(event_target_value(&ev))
            />
            <button id="menu-submit-button" type="submit">"확인"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_menu_name_trims() {
        assert_eq!(normalize_menu_name("  Latte "), Some("Latte".to_string()));
    }

    #[test]
    fn test_normalize_menu_name_rejects_empty_input() {
        assert_eq!(normalize_menu_name(""), None);
        assert_eq!(normalize_menu_name("   "), None);
    }
}
