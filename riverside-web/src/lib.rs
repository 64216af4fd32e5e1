#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod library;
pub mod pages;
pub mod paths;
pub mod points;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        dom::console_error(&format!("logger already initialised: {err}"));
    }
    // Ensure <html lang> is set at startup according to the saved locale
    crate::i18n::set_lang(&crate::i18n::current_lang());
    // Apply saved high-contrast preference
    if crate::a11y::high_contrast_enabled() {
        crate::a11y::set_high_contrast(true);
    }
    yew::Renderer::<app::App>::new().render();
}
