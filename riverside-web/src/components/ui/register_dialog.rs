use super::confirmation::announce;
use super::contact_fields::ContactFields;
use super::fields::{IssueList, input_value, parse_count};
use super::issues::{form_level, registration_issue_text};
use crate::components::modal::Modal;
use crate::i18n::{fmt_currency, t, tr};
use crate::library::Library;
use riverside_core::{
    BookingRequest, ContactDetails, EscapeRoomEvent, RegistrationForm, RegistrationIssue,
};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub event: Option<EscapeRoomEvent>,
    pub library: Library,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

/// Group registration for an escape room: attendee counts, live tiered
/// price and contact details. Submitting awards the registration bonus.
#[function_component(RegisterDialog)]
pub fn register_dialog(p: &Props) -> Html {
    let form = use_state(RegistrationForm::default);

    let Some(event) = p.event.as_ref() else {
        return Html::default();
    };
    let pricing = &p.library.data().pricing.events;
    let quote = form.quote(pricing);
    let issues = form.issues(event, pricing);

    let close = {
        let form = form.clone();
        let cb = p.on_close.clone();
        Callback::from(move |()| {
            form.set(RegistrationForm::default());
            cb.emit(());
        })
    };

    let count_input = |apply: fn(&mut RegistrationForm, u32)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, parse_count(&input_value(&e)));
            form.set(next);
        })
    };
    let on_adults = count_input(|f, n| f.adults = n);
    let on_kids = count_input(|f, n| f.kids = n);
    let on_contact = {
        let form = form.clone();
        Callback::from(move |contact: ContactDetails| {
            form.set(RegistrationForm {
                contact,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let library = p.library.clone();
        let event = event.clone();
        let close = close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pricing = &library.data().pricing.events;
            match form.request(&event, pricing) {
                Ok(request) => {
                    let receipt = library.submit(&BookingRequest::EventRegistration(request));
                    announce(&receipt);
                    close.emit(());
                }
                Err(issues) => log::debug!("registration blocked: {issues:?}"),
            }
        })
    };

    let group_hint = {
        let (min, max) = (pricing.group.min.to_string(), pricing.group.max.to_string());
        let args = BTreeMap::from([("min", min.as_str()), ("max", max.as_str())]);
        tr("register.group_hint", Some(&args))
    };
    let title = {
        let args = BTreeMap::from([("title", event.title.as_str())]);
        tr("register.title", Some(&args))
    };
    let messages = form_level(
        &issues,
        |issue| matches!(issue, RegistrationIssue::Contact(_)),
        registration_issue_text,
    );
    let max_people = pricing.group.max.min(event.spots_left);

    html! {
        <Modal
            open={p.open}
            title={title}
            on_close={close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("register-dialog")}
        >
            <form class="booking-form" {onsubmit} novalidate=true>
                <fieldset class="attendees">
                    <div class="field">
                        <label for="register-adults">{ t("register.adults") }</label>
                        <input id="register-adults" type="number" min="0" max={max_people.to_string()}
                            value={form.adults.to_string()} oninput={on_adults} />
                    </div>
                    <div class="field">
                        <label for="register-kids">{ t("register.kids") }</label>
                        <input id="register-kids" type="number" min="0" max={max_people.to_string()}
                            value={form.kids.to_string()} oninput={on_kids} />
                    </div>
                    <p class="field__hint">{ group_hint }</p>
                </fieldset>
                <p class="booking-form__total" aria-live="polite">
                    { t("register.total") }{": "}
                    <strong>{ fmt_currency(quote.total_cents) }</strong>
                </p>
                <IssueList messages={messages} id={Some(AttrValue::from("register-issues"))} />
                <ContactFields value={form.contact.clone()} on_change={on_contact} id_prefix="register" />
                <div class="modal__actions">
                    <button type="button" class="btn" onclick={Callback::from(move |_: MouseEvent| close.emit(()))}>
                        { t("ui.cancel") }
                    </button>
                    <button type="submit" class="btn btn--primary" disabled={!issues.is_empty()}>
                        { t("register.submit") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
