/// Campus Web Admin Interface
///
/// Leptos-based management UI for JB College. The authenticated navigation
/// shell lives in [`shell`] (logic) and [`components`] (views).

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod shell;
pub mod types;

pub use error::{CampusError, Result};

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logging::init_browser();
    leptos::mount_to_body(App);
}
