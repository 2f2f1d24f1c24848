#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod build_info;
pub mod contact;
pub mod icon;
pub mod motion;
pub mod portfolio;
pub mod toast;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // logger already installed, e.g. on hot reload
        log::debug!("console logger already initialised");
    }
    leptos::mount::hydrate_body(App);
}
