//! UI Components
//!
//! Reusable Leptos components.

mod category_nav;
mod delete_confirm_button;
mod menu_form;
mod menu_list;
mod menu_row;

pub use category_nav::CategoryNav;
pub use delete_confirm_button::DeleteConfirmButton;
pub use menu_form::MenuForm;
pub use menu_list::MenuList;
pub use menu_row::MenuRow;
