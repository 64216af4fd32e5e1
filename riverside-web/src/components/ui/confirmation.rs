//! Rendering of a simulated booking confirmation.
use crate::i18n::{t, tr};
use riverside_core::{BookingReceipt, SummaryLine};
use std::collections::BTreeMap;
use yew::prelude::*;

fn field_label(line: &SummaryLine) -> String {
    t(&format!("confirm.field.{}", line.field))
}

fn reference_line(receipt: &BookingReceipt) -> String {
    let args = BTreeMap::from([("reference", receipt.confirmation.reference.as_str())]);
    tr("confirm.reference", Some(&args))
}

fn awarded_line(receipt: &BookingReceipt) -> Option<String> {
    (receipt.awarded > 0).then(|| {
        let points = receipt.awarded.to_string();
        let args = BTreeMap::from([("points", points.as_str())]);
        tr("confirm.awarded", Some(&args))
    })
}

/// Plain-text confirmation: heading, reference, one `Label: value` line per
/// submitted field and the points earned.
#[must_use]
pub fn confirmation_text(receipt: &BookingReceipt) -> String {
    let mut lines = vec![t("confirm.heading"), reference_line(receipt)];
    lines.extend(
        receipt
            .confirmation
            .summary
            .iter()
            .map(|line| format!("{}: {}", field_label(line), line.value)),
    );
    lines.extend(awarded_line(receipt));
    lines.join("\n")
}

/// Tell the user about a completed booking.
pub fn announce(receipt: &BookingReceipt) {
    let text = confirmation_text(receipt);
    crate::a11y::set_status(&text);
    #[cfg(target_arch = "wasm32")]
    crate::dom::alert(&text);
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub receipt: BookingReceipt,
}

#[function_component(ConfirmationSummary)]
pub fn confirmation_summary(p: &Props) -> Html {
    html! {
        <section class="confirmation" role="status">
            <h3>{ t("confirm.heading") }</h3>
            <p class="confirmation__reference">{ reference_line(&p.receipt) }</p>
            <dl>
                { for p.receipt.confirmation.summary.iter().map(|line| html! {
                    <>
                        <dt>{ field_label(line) }</dt>
                        <dd>{ line.value.clone() }</dd>
                    </>
                }) }
            </dl>
            { awarded_line(&p.receipt).map(|text| html! {
                <p class="confirmation__points">{ text }</p>
            }).unwrap_or_default() }
        </section>
    }
}
