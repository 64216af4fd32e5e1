use super::event_card::based_on;
use crate::components::modal::Modal;
use crate::i18n::{fmt_currency, fmt_date, t, tr, tr_count};
use crate::paths::image_src;
use riverside_core::{EscapeRoomEvent, EventPricing, PriceTier};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub event: Option<EscapeRoomEvent>,
    pub pricing: EventPricing,
    pub on_close: Callback<()>,
    /// Receives the event id; the page swaps this dialog for registration.
    pub on_register: Callback<String>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn people_range(min: u32, max: u32) -> String {
    if min == max {
        return tr_count("event_info.person_count", u64::from(min));
    }
    let (min, max) = (min.to_string(), max.to_string());
    let args = BTreeMap::from([("min", min.as_str()), ("max", max.as_str())]);
    tr("event_info.people", Some(&args))
}

fn tier_row(tier: &PriceTier) -> Html {
    html! {
        <tr>
            <th scope="row">{ people_range(tier.min_people, tier.max_people) }</th>
            <td>{ fmt_currency(tier.adult_cents) }</td>
            <td>{ fmt_currency(tier.kid_cents) }</td>
        </tr>
    }
}

#[function_component(EventInfoDialog)]
pub fn event_info_dialog(p: &Props) -> Html {
    let Some(event) = p.event.as_ref() else {
        return Html::default();
    };
    let register = {
        let cb = p.on_register.clone();
        let id = event.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let spots = {
        let (left, total) = (event.spots_left.to_string(), event.total_spots.to_string());
        let args = BTreeMap::from([("left", left.as_str()), ("total", total.as_str())]);
        tr("event_info.spots", Some(&args))
    };
    let required_note = {
        let args = BTreeMap::from([
            ("title", event.book_title.as_str()),
            ("author", event.book_author.as_str()),
        ]);
        tr("event_info.required_note", Some(&args))
    };

    html! {
        <Modal
            open={p.open}
            title={event.title.clone()}
            description={Some(AttrValue::from(based_on(event)))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("event-info")}
        >
            <img class="event-info__image" src={image_src(&event.image_url)} alt="" />
            <p>{ event.description.clone() }</p>
            <dl class="event-info__facts">
                <dt>{ t("event_info.when") }</dt>
                <dd>
                    <time datetime={event.date.to_string()}>{ fmt_date(event.date) }</time>
                    {", "}{ event.time.clone() }
                </dd>
                <dt>{ t("event_info.group") }</dt>
                <dd>{ people_range(p.pricing.group.min, p.pricing.group.max) }</dd>
                <dd>{ spots }</dd>
            </dl>
            <h3>{ t("event_info.pricing") }</h3>
            <table class="event-info__pricing">
                <thead>
                    <tr>
                        <th scope="col">{ t("event_info.group") }</th>
                        <th scope="col">{ t("event_info.adult") }</th>
                        <th scope="col">{ t("event_info.kid") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for p.pricing.tiers.iter().map(tier_row) }
                </tbody>
            </table>
            <section class="event-info__book">
                <h3>{ t("event_info.required_book") }</h3>
                <p>{ required_note }</p>
            </section>
            <div class="modal__actions">
                <button type="button" class="btn btn--primary" disabled={event.is_full()} onclick={register}>
                    { t("events.register") }
                </button>
            </div>
        </Modal>
    }
}
