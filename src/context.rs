//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the active menu from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active menu from the service - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a re-fetch of the active category's menu
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
