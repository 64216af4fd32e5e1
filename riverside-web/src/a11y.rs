// Accessibility helpers

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const HIGH_CONTRAST_KEY: &str = "riverside.hc";
const STATUS_REGION_ID: &str = "status-live";
const FOCUSABLE_QUERY: &str = "button:not([disabled]), [href], input:not([disabled]), textarea, select, [tabindex]:not([tabindex='-1'])";

/// Focus ring and screen-reader utility CSS, injected once at the top of `<main>`.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #1d6fb8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

#[must_use]
pub const fn status_region_id() -> &'static str {
    STATUS_REGION_ID
}

/// Announce `msg` through the polite live region.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

fn focusables(container_id: &str) -> Vec<HtmlElement> {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Move focus to the first focusable element inside `container_id`.
pub fn trap_focus_in(container_id: &str) {
    if let Some(first) = focusables(container_id).first() {
        let _ = first.focus();
    }
}

/// Keep Tab inside `container_id`. Returns true when focus was wrapped and the
/// key event should be swallowed.
#[must_use]
pub fn wrap_tab_focus(container_id: &str, backwards: bool) -> bool {
    let items = focusables(container_id);
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return false;
    };
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let Some(active) = active else {
        return false;
    };
    let at = |el: &HtmlElement| {
        let el: &web_sys::Element = el.unchecked_ref();
        *el == active
    };
    if backwards && at(first) {
        let _ = last.focus();
        true
    } else if !backwards && at(last) {
        let _ = first.focus();
        true
    } else {
        false
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Toggle the `hc` class on `<html>` and persist the choice.
pub fn set_high_contrast(enabled: bool) {
    let Some(win) = web_sys::window() else {
        return;
    };

    if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
        let _ = if enabled {
            html.class_list().add_1("hc")
        } else {
            html.class_list().remove_1("hc")
        };
    }

    if let Some(storage) = win.local_storage().ok().flatten() {
        let _ = storage.set_item(HIGH_CONTRAST_KEY, if enabled { "1" } else { "0" });
    }
}

/// Saved high-contrast preference; false when nothing is stored.
#[must_use]
pub fn high_contrast_enabled() -> bool {
    if !cfg!(target_arch = "wasm32") {
        return false;
    }
    web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(HIGH_CONTRAST_KEY).ok().flatten())
        .is_some_and(|v| v == "1")
}
