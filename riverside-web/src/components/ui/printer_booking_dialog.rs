use super::confirmation::announce;
use super::contact_fields::ContactFields;
use super::fields::{IssueList, date_value, input_value, parse_date, select_value, textarea_value};
use super::issues::{form_level, printer_issue_text};
use crate::components::modal::Modal;
use crate::i18n::{fmt_currency, fmt_date, t, tr};
use crate::library::Library;
use riverside_core::{BookingRequest, ContactDetails, Printer, PrinterBookingForm, PrinterBookingIssue};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub printer: Option<Printer>,
    pub library: Library,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn choice(value: &str, label: String, selected: &str) -> Html {
    html! {
        <option value={value.to_string()} selected={value == selected}>{ label }</option>
    }
}

/// Session booking for a single printer: day, slot, duration, material and
/// what the visitor plans to make.
#[function_component(PrinterBookingDialog)]
pub fn printer_booking_dialog(p: &Props) -> Html {
    let form = use_state(PrinterBookingForm::default);

    let Some(printer) = p.printer.as_ref() else {
        return Html::default();
    };
    let today = p.library.today();
    let pricing = &p.library.data().pricing.printers;
    let issues = form.issues(printer, pricing, today);
    let first_bookable = pricing.first_bookable(today);

    let close = {
        let form = form.clone();
        let cb = p.on_close.clone();
        Callback::from(move |()| {
            form.set(PrinterBookingForm::default());
            cb.emit(());
        })
    };

    let update = |apply: fn(&mut PrinterBookingForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_date = {
        let set = update(|f, v| f.date = parse_date(&v));
        Callback::from(move |e: InputEvent| set(input_value(&e)))
    };
    let on_slot = {
        let set = update(|f, v| f.time_slot = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_duration = {
        let set = update(|f, v| f.duration_id = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_material = {
        let set = update(|f, v| f.material = v);
        Callback::from(move |e: Event| set(select_value(&e)))
    };
    let on_project = {
        let set = update(|f, v| f.project_description = v);
        Callback::from(move |e: InputEvent| set(textarea_value(&e)))
    };
    let on_contact = {
        let form = form.clone();
        Callback::from(move |contact: ContactDetails| {
            form.set(PrinterBookingForm {
                contact,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let library = p.library.clone();
        let printer = printer.clone();
        let close = close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pricing = &library.data().pricing.printers;
            match form.request(&printer, pricing, library.today()) {
                Ok(request) => {
                    let receipt = library.submit(&BookingRequest::PrinterBooking(request));
                    announce(&receipt);
                    close.emit(());
                }
                Err(issues) => log::debug!("printer booking blocked: {issues:?}"),
            }
        })
    };

    let title = {
        let args = BTreeMap::from([("name", printer.name.as_str())]);
        tr("printer_booking.title", Some(&args))
    };
    let earliest = {
        let date = fmt_date(first_bookable);
        let args = BTreeMap::from([("date", date.as_str())]);
        tr("printer_booking.earliest", Some(&args))
    };
    let messages = form_level(
        &issues,
        |issue| matches!(issue, PrinterBookingIssue::Contact(_)),
        printer_issue_text,
    );
    let total = form
        .price_cents(pricing)
        .map(fmt_currency)
        .unwrap_or_else(|| "\u{2014}".to_string());

    html! {
        <Modal
            open={p.open}
            title={title}
            on_close={close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("printer-booking")}
        >
            <form class="booking-form" {onsubmit} novalidate=true>
                <div class="field">
                    <label for="printer-date">{ t("printer_booking.date") }</label>
                    <input id="printer-date" type="date" min={date_value(Some(first_bookable))}
                        value={date_value(form.date)} oninput={on_date} aria-describedby="printer-date-hint" />
                    <p id="printer-date-hint" class="field__hint">{ earliest }</p>
                </div>
                <div class="field">
                    <label for="printer-slot">{ t("printer_booking.time_slot") }</label>
                    <select id="printer-slot" onchange={on_slot}>
                        { choice("", t("printer_booking.choose"), &form.time_slot) }
                        { for pricing.time_slots.iter().map(|slot| choice(slot, slot.clone(), &form.time_slot)) }
                    </select>
                </div>
                <div class="field">
                    <label for="printer-duration">{ t("printer_booking.duration") }</label>
                    <select id="printer-duration" onchange={on_duration}>
                        { choice("", t("printer_booking.choose"), &form.duration_id) }
                        { for pricing.durations.iter().map(|tier| choice(
                            &tier.id,
                            format!("{} ({})", tier.label, fmt_currency(tier.price_cents)),
                            &form.duration_id,
                        )) }
                    </select>
                </div>
                <div class="field">
                    <label for="printer-material">{ t("printer_booking.material") }</label>
                    <select id="printer-material" onchange={on_material}>
                        { choice("", t("printer_booking.choose"), &form.material) }
                        { for printer.bookable_materials().into_iter().map(|m| choice(m, m.to_string(), &form.material)) }
                    </select>
                </div>
                <div class="field">
                    <label for="printer-project">{ t("printer_booking.project") }</label>
                    <textarea id="printer-project" rows="3" value={form.project_description.clone()} oninput={on_project} />
                </div>
                <p class="booking-form__total" aria-live="polite">
                    { t("printer_booking.total") }{": "}<strong>{ total }</strong>
                </p>
                <IssueList messages={messages} id={Some(AttrValue::from("printer-issues"))} />
                <ContactFields value={form.contact.clone()} on_change={on_contact} id_prefix="printer" />
                <div class="modal__actions">
                    <button type="button" class="btn" onclick={Callback::from(move |_: MouseEvent| close.emit(()))}>
                        { t("ui.cancel") }
                    </button>
                    <button type="submit" class="btn btn--primary" disabled={!issues.is_empty()}>
                        { t("printer_booking.submit") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
