use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <Link<Route> to={Route::EscapeRooms} classes={classes!("btn", "btn--primary")}>
                { t("not_found.back") }
            </Link<Route>>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, History, MemoryHistory};

    #[function_component(Harness)]
    fn harness() -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push("/missing");
        html! {
            <Router {history}>
                <NotFound />
            </Router>
        }
    }

    #[test]
    fn links_back_to_the_schedule() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<Harness>::new().render());
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
