//! Café Menu App
//!
//! Root application component: owns the store, runs the fetch effect and
//! lays out the navigation, form and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CategoryNav, MenuForm, MenuList};
use crate::context::AppContext;
use crate::store::{store_replace_menu, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load the active category's menu on mount, on category switch and
    // after every mutation (reload trigger)
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let category = store.current_category().get();
        web_sys::console::log_1(
            &format!(
                "[APP] Loading menus for {}, trigger={}",
                category.as_str(),
                trigger
            )
            .into(),
        );
        spawn_local(async move {
            match api::list_menus(category).await {
                Ok(items) => store_replace_menu(&store, category, items),
                Err(e) => web_sys::console::error_1(
                    &format!("[APP] Error loading {}: {}", category.as_str(), e).into(),
                ),
            }
        });
    });

    view! {
        <div class="app">
            <header class="my-4 text-center">
                <h1>"카페 메뉴 관리"</h1>
                <CategoryNav />
            </header>

            <main class="mt-10 d-flex justify-center">
                <div class="wrapper">
                    <h2 id="category-title" class="text-center">
                        {move || format!("{} 메뉴 관리", store.current_category().get().label())}
                    </h2>
                    <MenuForm />
                    <MenuList />
                </div>
            </main>
        </div>
    }
}
