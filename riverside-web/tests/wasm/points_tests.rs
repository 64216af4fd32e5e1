#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use riverside_core::{MemoryPointsStorage, PointsStore};
use riverside_web::dom;
use riverside_web::library::Library;
use riverside_web::points::use_points_balance;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_points_root() -> Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("points-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create points root");
    root.set_id("points-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append points root");
    root
}

fn store_with(balance: &str) -> PointsStore {
    PointsStore::new(MemoryPointsStorage::with_entry("library_points", balance))
}

#[function_component(SwitchingStores)]
fn switching_stores() -> Html {
    let stores = use_memo((), |()| (store_with("120"), store_with("480")));
    let use_second = use_state(|| false);
    let store = if *use_second { &stores.1 } else { &stores.0 };
    let balance = use_points_balance(store);
    let onclick = {
        let use_second = use_second.clone();
        Callback::from(move |_: MouseEvent| use_second.set(true))
    };
    html! {
        <>
            <output id="switch-balance">{ balance }</output>
            <button id="switch-store" {onclick}>{ "switch" }</button>
        </>
    }
}

fn shown_balance() -> String {
    dom::document()
        .get_element_by_id("switch-balance")
        .expect("balance output")
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn balance_follows_a_replaced_store() {
    yew::Renderer::<SwitchingStores>::with_root(ensure_points_root()).render();
    dom::sleep_ms(0).await.expect("yield to the scheduler");
    assert_eq!(shown_balance(), "120");

    let button: HtmlElement = dom::document()
        .get_element_by_id("switch-store")
        .expect("switch button")
        .dyn_into()
        .expect("button element");
    button.click();
    dom::sleep_ms(20).await.expect("let effects settle");
    assert_eq!(shown_balance(), "480");
}

#[wasm_bindgen_test]
fn page_loads_draw_different_random_balances() {
    let first = Library::browser().store().set_random(0, 1_000_000_000);
    let second = Library::browser().store().set_random(0, 1_000_000_000);
    assert_ne!(first, second);
}
