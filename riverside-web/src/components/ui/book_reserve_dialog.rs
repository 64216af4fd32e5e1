use super::book_card::by_author;
use super::confirmation::{ConfirmationSummary, announce};
use super::contact_fields::ContactFields;
use super::fields::{IssueList, date_value, input_value, parse_date};
use super::issues::{form_level, reservation_issue_text};
use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use crate::library::Library;
use riverside_core::constants::LOAN_PERIOD_DAYS;
use riverside_core::{Book, BookingReceipt, BookingRequest, ContactDetails, ReservationForm, ReservationIssue};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub book: Option<Book>,
    pub library: Library,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

/// Pickup reservation. After submitting, the confirmation stays on screen
/// for a moment before the dialog resets and closes itself.
#[function_component(BookReserveDialog)]
pub fn book_reserve_dialog(p: &Props) -> Html {
    let form = use_state(ReservationForm::default);
    let receipt = use_state(|| None::<BookingReceipt>);

    let close = {
        let form = form.clone();
        let receipt = receipt.clone();
        let cb = p.on_close.clone();
        Callback::from(move |()| {
            form.set(ReservationForm::default());
            receipt.set(None);
            cb.emit(());
        })
    };

    {
        let close = close.clone();
        use_effect_with(receipt.is_some(), move |confirmed| {
            let alive = std::rc::Rc::new(std::cell::Cell::new(true));
            if *confirmed {
                schedule_reset(alive.clone(), close);
            }
            move || alive.set(false)
        });
    }

    let Some(book) = p.book.as_ref() else {
        return Html::default();
    };
    let today = p.library.today();
    let title = {
        let args = BTreeMap::from([("title", book.title.as_str())]);
        tr("reservation.title", Some(&args))
    };

    if let Some(done) = receipt.as_ref() {
        let success = {
            let args = BTreeMap::from([("title", book.title.as_str())]);
            tr("reservation.success", Some(&args))
        };
        let loan = {
            let days = LOAN_PERIOD_DAYS.to_string();
            let args = BTreeMap::from([("days", days.as_str())]);
            tr("books.loan_period", Some(&args))
        };
        return html! {
            <Modal
                open={p.open}
                title={title}
                on_close={close}
                return_focus_id={p.return_focus_id.clone()}
                class={classes!("book-reserve", "book-reserve--done")}
            >
                <p class="book-reserve__success">{ success }</p>
                <ConfirmationSummary receipt={done.clone()} />
                <p class="field__hint">{ loan }</p>
            </Modal>
        };
    }

    let issues = form.issues(today);
    let on_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ReservationForm {
                pickup_date: parse_date(&input_value(&e)),
                ..(*form).clone()
            });
        })
    };
    let on_contact = {
        let form = form.clone();
        Callback::from(move |contact: ContactDetails| {
            form.set(ReservationForm {
                contact,
                ..(*form).clone()
            });
        })
    };
    let onsubmit = {
        let form = form.clone();
        let receipt = receipt.clone();
        let library = p.library.clone();
        let book = book.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.request(&book, library.today()) {
                Ok(request) => {
                    let done = library.submit(&BookingRequest::BookReservation(request));
                    announce(&done);
                    receipt.set(Some(done));
                }
                Err(issues) => log::debug!("reservation blocked: {issues:?}"),
            }
        })
    };
    let messages = form_level(
        &issues,
        |issue| matches!(issue, ReservationIssue::Contact(_)),
        reservation_issue_text,
    );

    html! {
        <Modal
            open={p.open}
            title={title}
            description={Some(AttrValue::from(by_author(book)))}
            on_close={close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("book-reserve")}
        >
            <form class="booking-form" {onsubmit} novalidate=true>
                <div class="field">
                    <label for="reserve-pickup">{ t("reservation.pickup_date") }</label>
                    <input id="reserve-pickup" type="date" min={date_value(Some(today))}
                        value={date_value(form.pickup_date)} oninput={on_date} />
                </div>
                <IssueList messages={messages} id={Some(AttrValue::from("reserve-issues"))} />
                <ContactFields value={form.contact.clone()} on_change={on_contact} id_prefix="reserve" />
                <div class="modal__actions">
                    <button type="button" class="btn" onclick={Callback::from(move |_: MouseEvent| close.emit(()))}>
                        { t("ui.cancel") }
                    </button>
                    <button type="submit" class="btn btn--primary" disabled={!issues.is_empty()}>
                        { t("reservation.submit") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Close the dialog once the confirmation delay has passed, unless the
/// dialog was closed or unmounted first.
#[cfg(target_arch = "wasm32")]
fn schedule_reset(alive: std::rc::Rc<std::cell::Cell<bool>>, close: Callback<()>) {
    use riverside_core::constants::RESERVATION_CONFIRM_DELAY_MS;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::dom::sleep_ms(RESERVATION_CONFIRM_DELAY_MS).await {
            log::warn!("reservation timer failed: {}", crate::dom::js_error_message(&err));
        }
        if alive.get() {
            close.emit(());
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_reset(_alive: std::rc::Rc<std::cell::Cell<bool>>, _close: Callback<()>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn form_starts_with_missing_pickup_date() {
        crate::i18n::set_lang("en");
        let library = Library::in_memory(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
        let book = library.data().books.find(2).cloned();
        let props = Props {
            open: true,
            book,
            library,
            on_close: Callback::noop(),
            return_focus_id: None,
        };
        let html = block_on(LocalServerRenderer::<BookReserveDialog>::with_props(props).render());
        assert!(html.contains("Reserve Clean Code"));
        assert!(html.contains("Pick a pickup date."));
        assert!(html.contains("min=\"2025-10-21\""));
        assert!(html.contains("reserve-first_name"));
    }
}
