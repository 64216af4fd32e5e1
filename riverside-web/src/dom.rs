//! Thin accessors over the browser globals the app touches.
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// The page's `window`.
///
/// # Panics
/// Outside a browser, where there is no `window`.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("no `window` outside a browser")
}

/// The page's `document`.
///
/// # Panics
/// When the window has no document, e.g. inside a worker.
#[must_use]
pub fn document() -> Document {
    window().document().expect("window has no `document`")
}

/// Best-effort text for a thrown JavaScript value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Straight to `console.error`, for when the logger itself failed.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Wait `duration_ms` on the browser timer queue.
///
/// # Errors
/// If `setTimeout` refuses the callback or the timer promise rejects.
#[allow(clippy::future_not_send)] // `JsFuture` is tied to the JS thread.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut scheduled = Ok(0);
    let timer = Promise::new(&mut |resolve, _reject| {
        scheduled = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms);
    });
    scheduled?;
    JsFuture::from(timer).await.map(drop)
}

/// Modal `window.alert`; failures only reach the console.
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        console_error(&js_error_message(&err));
    }
}

/// The origin's `localStorage`.
///
/// # Errors
/// If storage is disabled (private mode, sandboxed frame) or access throws.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage is disabled"))
}
