//! Menu Row Component
//!
//! A single menu row: name with sold-out marker, inline rename editor
//! and the sold-out / edit / remove actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::MenuItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single menu item row
#[component]
pub fn MenuRow(item: MenuItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id;
    let is_sold_out = item.is_sold_out;
    let name = item.name.clone();
    let edit_name = item.name.clone();

    // Inline rename editor, pre-filled with the current name
    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(item.name.clone());

    let save_name = move || {
        if !editing.get() {
            return;
        }
        set_editing.set(false);
        let new_name = edit_value.get().trim().to_string();
        if new_name.is_empty() {
            return;
        }
        let category = store.current_category().get();
        spawn_local(async move {
            if api::update_menu(category, &new_name, id).await.is_ok() {
                ctx.reload();
            }
        });
    };

    let toggle_sold_out = move |_| {
        let category = store.current_category().get();
        spawn_local(async move {
            if api::toggle_sold_out(category, id).await.is_ok() {
                ctx.reload();
            }
        });
    };

    let delete_menu = move |_: ()| {
        let category = store.current_category().get();
        spawn_local(async move {
            if api::delete_menu(category, id).await.is_ok() {
                ctx.reload();
            }
        });
    };

    view! {
        <li class="menu-list-item d-flex items-center py-2" data-menu-id=id.to_string()>
            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="w-100 pl-2 menu-name-input"
                        prop:value=move || edit_value.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_edit_value.set(input.value());
                        }
                        on:blur=move |_| save_name()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_name();
                            } else if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <span class="w-100 pl-2 menu-name" class:sold-out=is_sold_out>
                        {name.clone()}
                    </span>
                }.into_any()
            }}

            <button
                type="button"
                class="bg-gray-50 text-gray-500 text-sm mr-1 menu-sold-out-button"
                on:click=toggle_sold_out
            >
                "품절"
            </button>
            <button
                type="button"
                class="bg-gray-50 text-gray-500 text-sm mr-1 menu-edit-button"
                on:click=move |_| {
                    set_edit_value.set(edit_name.clone());
                    set_editing.set(true);
                }
            >
                "수정"
            </button>
            <DeleteConfirmButton
                button_class="bg-gray-50 text-gray-500 text-sm menu-remove-button"
                on_confirm=delete_menu
            />
        </li>
    }
}
