use crate::library::Library;
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let library = use_memo((), |()| Library::browser());
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner library={(*library).clone()} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub library: Library,
}

/// Everything below the router: header, routed page, dialogs and footer.
/// Needs a router context from the caller.
#[function_component(AppInner)]
pub fn app_inner(props: &AppProps) -> Html {
    let app_state = state::use_app_state(props.library.clone());
    crate::points::use_cross_tab_sync(app_state.library.store());
    let handlers = view::AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}

/// Page shown for `route`.
#[must_use]
pub fn switch(route: Route, library: &Library) -> Html {
    use crate::pages::books::BooksPage;
    use crate::pages::escape_rooms::EscapeRoomsPage;
    use crate::pages::not_found::NotFound;
    use crate::pages::printers::PrintersPage;
    use riverside_core::PrinterKind;

    let library = library.clone();
    match route {
        Route::EscapeRooms => html! { <EscapeRoomsPage {library} /> },
        Route::Printers => html! { <PrintersPage {library} kind={PrinterKind::ThreeD} /> },
        Route::DocumentPrinters => html! { <PrintersPage {library} kind={PrinterKind::Document} /> },
        Route::Books => html! { <BooksPage {library} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use riverside_core::{MemoryPointsStorage, PointsStore};
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};
    use yew_router::prelude::Router;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        path: &'static str,
        library: Library,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(props.path);
        html! {
            <Router {history}>
                <AppInner library={props.library.clone()} />
            </Router>
        }
    }

    fn render(path: &'static str, balance: &str) -> String {
        crate::i18n::set_lang("en");
        let store = PointsStore::new(MemoryPointsStorage::with_entry("library_points", balance));
        let library = Library::with_store(store, NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
        block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { path, library }).render())
    }

    #[test]
    fn shell_has_skip_link_nav_and_balance() {
        let html = render("/", "75");
        assert!(html.contains("href=\"#main\""));
        assert!(html.contains("id=\"main\""));
        assert!(html.contains("75 points"));
        assert!(html.contains("id=\"status-live\""));
        assert!(html.contains("Escape Rooms"));
        assert!(html.contains("Riverside Library"));
    }

    #[test]
    fn routes_pick_their_page() {
        assert!(render("/books", "0").contains("Our collection"));
        assert!(render("/documents", "0").contains("HP LaserJet Pro M404dn"));
        assert!(render("/shelf-13", "0").contains("Page not found"));
    }

    #[test]
    fn dialogs_start_closed() {
        let html = render("/printers", "0");
        assert!(!html.contains("role=\"dialog\""));
    }
}
