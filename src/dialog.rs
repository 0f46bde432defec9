//! Browser Dialogs
//!
//! Thin wrapper around the native window dialogs; views call these
//! instead of reaching for `web_sys::window()` themselves.

/// Show a blocking alert dialog
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
