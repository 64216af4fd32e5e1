#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};
use yew::prelude::*;

use riverside_core::constants::RESERVATION_CONFIRM_DELAY_MS;
use riverside_web::components::ui::book_reserve_dialog::{BookReserveDialog, Props};
use riverside_web::dom;
use riverside_web::library::Library;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_dialog_root() -> Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("dialog-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create dialog root");
    root.set_id("dialog-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append dialog root");
    root
}

/// Submissions pop a confirmation alert; keep it from blocking the runner.
fn silence_alerts() {
    js_sys::Reflect::set(
        &dom::window(),
        &"alert".into(),
        &js_sys::Function::new_no_args(""),
    )
    .expect("stub alert");
}

fn reserve_props(closed: Rc<Cell<bool>>) -> Props {
    let library = Library::in_memory(NaiveDate::from_ymd_opt(2025, 10, 21).expect("date"));
    Props {
        open: true,
        book: library.data().books.find(2).cloned(),
        library,
        on_close: Callback::from(move |()| closed.set(true)),
        return_focus_id: None,
    }
}

async fn type_into(id: &str, value: &str) {
    let input: HtmlInputElement = dom::document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
        .dyn_into()
        .expect("input element");
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    input
        .dispatch_event(&Event::new_with_event_init_dict("input", &init).expect("input event"))
        .expect("dispatch input");
    dom::sleep_ms(0).await.expect("yield to the scheduler");
}

async fn submit_valid_reservation() {
    type_into("reserve-pickup", "2025-10-24").await;
    type_into("reserve-first_name", "Jane").await;
    type_into("reserve-last_name", "Doe").await;
    type_into("reserve-email", "jane@example.org").await;
    type_into("reserve-phone", "+32 470 12 34 56").await;
    let submit: HtmlElement = dom::document()
        .query_selector(".book-reserve button[type='submit']")
        .expect("query submit")
        .expect("submit button")
        .dyn_into()
        .expect("button element");
    submit.click();
    dom::sleep_ms(0).await.expect("yield to the scheduler");
}

fn success_screen_shown() -> bool {
    dom::document()
        .query_selector(".book-reserve--done")
        .expect("query success screen")
        .is_some()
}

#[wasm_bindgen_test]
async fn reservation_confirmation_closes_after_the_delay() {
    riverside_web::i18n::set_lang("en");
    silence_alerts();
    let closed = Rc::new(Cell::new(false));
    yew::Renderer::<BookReserveDialog>::with_root_and_props(
        ensure_dialog_root(),
        reserve_props(closed.clone()),
    )
    .render();
    dom::sleep_ms(0).await.expect("yield to the scheduler");

    submit_valid_reservation().await;
    assert!(success_screen_shown());
    assert!(!closed.get());

    dom::sleep_ms(RESERVATION_CONFIRM_DELAY_MS / 2).await.expect("wait");
    assert!(success_screen_shown(), "confirmation stays up for the full delay");
    assert!(!closed.get());

    dom::sleep_ms(RESERVATION_CONFIRM_DELAY_MS / 2 + 300).await.expect("wait");
    assert!(closed.get());
    assert!(!success_screen_shown(), "form resets after closing");
}

#[wasm_bindgen_test]
async fn unmounting_cancels_the_pending_close() {
    riverside_web::i18n::set_lang("en");
    silence_alerts();
    let closed = Rc::new(Cell::new(false));
    let handle = yew::Renderer::<BookReserveDialog>::with_root_and_props(
        ensure_dialog_root(),
        reserve_props(closed.clone()),
    )
    .render();
    dom::sleep_ms(0).await.expect("yield to the scheduler");

    submit_valid_reservation().await;
    assert!(success_screen_shown());
    handle.destroy();

    dom::sleep_ms(RESERVATION_CONFIRM_DELAY_MS + 300).await.expect("wait");
    assert!(!closed.get());
}
