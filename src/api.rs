//! Menu API Client
//!
//! HTTP bindings to the remote menu service. The service owns all menu
//! data; callers re-fetch the affected category after every mutation.

use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::models::{Category, MenuItem};

/// Fixed API root under the serving origin
const API_ROOT: &str = "/api";

/// Diagnostic for non-2xx responses; the operation still proceeds
const HTTP_ERROR_MESSAGE: &str = "에러가 발생했습니다.";

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct MenuNameBody<'a> {
    name: &'a str,
}

// ========================
// URL Construction
// ========================

fn base_url() -> String {
    web_sys::window().unwrap().location().origin().unwrap()
}

fn menu_path(category: Category) -> String {
    format!("{}/category/{}/menu", API_ROOT, category.as_str())
}

fn menu_item_path(category: Category, menu_id: u32) -> String {
    format!("{}/{}", menu_path(category), menu_id)
}

fn sold_out_path(category: Category, menu_id: u32) -> String {
    format!("{}/soldout", menu_item_path(category, menu_id))
}

fn menu_url(category: Category) -> String {
    format!("{}{}", base_url(), menu_path(category))
}

fn menu_item_url(category: Category, menu_id: u32) -> String {
    format!("{}{}", base_url(), menu_item_path(category, menu_id))
}

fn sold_out_url(category: Category, menu_id: u32) -> String {
    format!("{}{}", base_url(), sold_out_path(category, menu_id))
}

fn log_http_error(response: &Response) {
    if !response.ok() {
        web_sys::console::error_1(&HTTP_ERROR_MESSAGE.into());
    }
}

// ========================
// Menu Operations
// ========================

/// Fetch the full menu of one category, in server order
pub async fn list_menus(category: Category) -> Result<Vec<MenuItem>, String> {
    let response = Request::get(&menu_url(category))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    response
        .json::<Vec<MenuItem>>()
        .await
        .map_err(|e| format!("JSON parse error: {}", e))
}

/// Create a menu item; the created entity is observed via the re-fetch
pub async fn create_menu(category: Category, name: &str) -> Result<(), String> {
    let response = Request::post(&menu_url(category))
        .json(&MenuNameBody { name })
        .map_err(|e| format!("Body error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    log_http_error(&response);
    Ok(())
}

/// Rename a menu item; the body is parsed even on an error status
pub async fn update_menu(
    category: Category,
    name: &str,
    menu_id: u32,
) -> Result<MenuItem, String> {
    let response = Request::put(&menu_item_url(category, menu_id))
        .json(&MenuNameBody { name })
        .map_err(|e| format!("Body error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    log_http_error(&response);
    response
        .json::<MenuItem>()
        .await
        .map_err(|e| format!("JSON parse error: {}", e))
}

/// Flip the sold-out flag of a menu item
pub async fn toggle_sold_out(category: Category, menu_id: u32) -> Result<(), String> {
    let response = Request::put(&sold_out_url(category, menu_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    log_http_error(&response);
    Ok(())
}

/// Remove a menu item
pub async fn delete_menu(category: Category, menu_id: u32) -> Result<(), String> {
    let response = Request::delete(&menu_item_url(category, menu_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    log_http_error(&response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_path() {
        assert_eq!(menu_path(Category::Espresso), "/api/category/espresso/menu");
        assert_eq!(menu_path(Category::Teavana), "/api/category/teavana/menu");
    }

    #[test]
    fn test_menu_item_path() {
        assert_eq!(
            menu_item_path(Category::Espresso, 1),
            "/api/category/espresso/menu/1"
        );
    }

    #[test]
    fn test_sold_out_path() {
        assert_eq!(
            sold_out_path(Category::Desert, 7),
            "/api/category/desert/menu/7/soldout"
        );
    }
}
