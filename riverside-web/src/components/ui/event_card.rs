use crate::i18n::{fmt_date, t, tr, tr_count};
use crate::paths::image_src;
use riverside_core::EscapeRoomEvent;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub event: EscapeRoomEvent,
    /// Both callbacks receive the event id.
    pub on_info: Callback<String>,
    pub on_register: Callback<String>,
}

#[must_use]
pub fn based_on(event: &EscapeRoomEvent) -> String {
    let args = BTreeMap::from([
        ("title", event.book_title.as_str()),
        ("author", event.book_author.as_str()),
    ]);
    tr("events.based_on", Some(&args))
}

#[function_component(EventCard)]
pub fn event_card(p: &Props) -> Html {
    let event = &p.event;
    let emit = |cb: &Callback<String>| {
        let cb = cb.clone();
        let id = event.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let availability = if event.is_full() {
        html! { <span class="badge badge--full">{ t("events.full") }</span> }
    } else if event.is_almost_full() {
        html! { <span class="badge badge--warning">{ t("events.almost_full") }</span> }
    } else {
        Html::default()
    };

    html! {
        <article class="card event-card" aria-labelledby={format!("event-{}-title", event.id)}>
            <img class="card__image" src={image_src(&event.image_url)} alt="" loading="lazy" />
            <div class="card__body">
                <div class="card__badges">
                    <span class={classes!("badge", format!("badge--{}", event.difficulty.key()))}>
                        { t(&format!("events.difficulty.{}", event.difficulty.key())) }
                    </span>
                    { availability }
                </div>
                <h3 id={format!("event-{}-title", event.id)}>{ event.title.clone() }</h3>
                <p class="event-card__book">{ based_on(event) }</p>
                <p class="event-card__when">
                    <time datetime={event.date.to_string()}>{ fmt_date(event.date) }</time>
                    {" · "}{ event.time.clone() }
                </p>
                <p class="event-card__spots">{ tr_count("events.spots_left", u64::from(event.spots_left)) }</p>
                <div class="card__actions">
                    <button type="button" id={format!("event-info-{}", event.id)} class="btn" onclick={emit(&p.on_info)}>
                        { t("events.info") }
                    </button>
                    <button
                        type="button"
                        id={format!("event-register-{}", event.id)}
                        class="btn btn--primary"
                        disabled={event.is_full()}
                        onclick={emit(&p.on_register)}
                    >
                        { t("events.register") }
                    </button>
                </div>
            </div>
        </article>
    }
}
