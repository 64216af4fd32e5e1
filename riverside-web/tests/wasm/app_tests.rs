#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlSelectElement, StorageEvent, StorageEventInit};
use yew::Renderer;

use riverside_web::app::App;
use riverside_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    riverside_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(0).await.expect("yield to the scheduler");
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app().await;
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
async fn balance_badge_reads_local_storage() {
    dom::local_storage()
        .expect("local storage")
        .set_item("library_points", "42")
        .expect("seed balance");
    render_app().await;
    let badge = dom::document()
        .query_selector(".points-display__value")
        .expect("query badge")
        .expect("badge exists");
    assert_eq!(badge.text_content().unwrap_or_default(), "42 points");
}

fn badge_text() -> String {
    dom::document()
        .query_selector(".points-display__value")
        .expect("query badge")
        .expect("badge exists")
        .text_content()
        .unwrap_or_default()
}

async fn storage_from_other_tab(key: Option<&str>, new_value: Option<&str>) {
    let init = StorageEventInit::new();
    init.set_key(key);
    init.set_new_value(new_value);
    let event = StorageEvent::new_with_event_init_dict("storage", &init).expect("storage event");
    dom::window().dispatch_event(&event).expect("dispatch storage");
    dom::sleep_ms(0).await.expect("yield to the scheduler");
}

#[wasm_bindgen_test]
async fn balance_badge_follows_other_tabs() {
    dom::local_storage()
        .expect("local storage")
        .set_item("library_points", "42")
        .expect("seed balance");
    render_app().await;
    assert_eq!(badge_text(), "42 points");

    storage_from_other_tab(Some("library_points"), Some("640")).await;
    assert_eq!(badge_text(), "640 points");

    storage_from_other_tab(Some("riverside.locale"), Some("5")).await;
    assert_eq!(badge_text(), "640 points");

    // `localStorage.clear()` in the other tab
    storage_from_other_tab(None, None).await;
    assert_eq!(badge_text(), "0 points");
}

#[wasm_bindgen_test]
async fn language_switch_updates_html_lang() {
    render_app().await;
    let doc = dom::document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("nl");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("nl".into()));

    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
}

#[wasm_bindgen_test]
async fn high_contrast_toggle_sets_html_class() {
    render_app().await;
    let doc = dom::document();
    let html = doc.document_element().expect("document element");
    html.class_list().remove_1("hc").expect("reset class");
    let btn: HtmlElement = doc
        .query_selector(".hc-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("cast to element");
    btn.click();
    assert!(html.class_list().contains("hc"));
}
