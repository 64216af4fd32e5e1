use crate::components::ui::event_card::EventCard;
use crate::components::ui::event_info_dialog::EventInfoDialog;
use crate::components::ui::register_dialog::RegisterDialog;
use crate::components::ui::search_bar::SearchBar;
use crate::i18n::t;
use crate::library::Library;
use crate::pages::{Selection, no_results};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub library: Library,
}

/// Escape-room schedule with search, info and registration dialogs.
#[function_component(EscapeRoomsPage)]
pub fn escape_rooms_page(p: &Props) -> Html {
    let query = use_state(String::new);
    let info = use_state(|| None::<Selection<String>>);
    let register = use_state(|| None::<Selection<String>>);

    let data = p.library.data();
    let events = data.events.search(&query);

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_info = {
        let info = info.clone();
        Callback::from(move |id: String| {
            let focus = format!("event-info-{id}");
            info.set(Some(Selection::new(id, focus)));
        })
    };
    let on_register = {
        let register = register.clone();
        Callback::from(move |id: String| {
            let focus = format!("event-register-{id}");
            register.set(Some(Selection::new(id, focus)));
        })
    };
    let close_info = {
        let info = info.clone();
        Callback::from(move |()| info.set(None))
    };
    let close_register = {
        let register = register.clone();
        Callback::from(move |()| register.set(None))
    };
    // Register from the info dialog: one dialog at a time, focus goes back
    // to the card's info button.
    let register_from_info = {
        let info = info.clone();
        let register = register.clone();
        Callback::from(move |id: String| {
            let focus = format!("event-info-{id}");
            info.set(None);
            register.set(Some(Selection::new(id, focus)));
        })
    };

    let selected_info = info.as_ref().and_then(|s| data.events.find(&s.id).cloned());
    let selected_register = register.as_ref().and_then(|s| data.events.find(&s.id).cloned());

    html! {
        <section class="page escape-rooms" aria-labelledby="escape-rooms-title">
            <h1 id="escape-rooms-title">{ t("events.title") }</h1>
            <p class="page__intro">{ t("events.intro") }</p>
            <SearchBar
                id="event-search"
                value={(*query).clone()}
                placeholder={t("search.placeholder.events")}
                on_input={on_query}
            />
            if events.is_empty() {
                { no_results(&query) }
            } else {
                <div class="card-grid">
                    { for events.iter().map(|event| html! {
                        <EventCard
                            key={event.id.clone()}
                            event={(*event).clone()}
                            on_info={on_info.clone()}
                            on_register={on_register.clone()}
                        />
                    }) }
                </div>
            }
            <EventInfoDialog
                open={selected_info.is_some()}
                event={selected_info}
                pricing={data.pricing.events.clone()}
                on_close={close_info}
                on_register={register_from_info}
                return_focus_id={info.as_ref().map(|s| s.focus.clone())}
            />
            <RegisterDialog
                open={selected_register.is_some()}
                event={selected_register}
                library={p.library.clone()}
                on_close={close_register}
                return_focus_id={register.as_ref().map(|s| s.focus.clone())}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn lists_every_event_without_a_query() {
        crate::i18n::set_lang("en");
        let props = Props {
            library: Library::in_memory(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()),
        };
        let html = block_on(LocalServerRenderer::<EscapeRoomsPage>::with_props(props).render());
        assert_eq!(html.matches("class=\"card event-card\"").count(), 4);
        assert!(!html.contains("role=\"dialog\""));
    }
}
