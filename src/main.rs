#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod context;
mod routes;
mod services;
mod stores;
mod utils;

use context::AuthProvider;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!(
        "Starting BookBuddy ({} auth)",
        if config::is_mock_auth_enabled() { "mock" } else { "hosted" }
    );

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Router::<routes::Route> {}
        }
    }
}
