use crate::components::ui::printer_booking_dialog::PrinterBookingDialog;
use crate::components::ui::printer_card::PrinterCard;
use crate::components::ui::printer_detail_dialog::PrinterDetailDialog;
use crate::components::ui::search_bar::SearchBar;
use crate::i18n::t;
use crate::library::Library;
use crate::pages::{Selection, no_results};
use riverside_core::PrinterKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub library: Library,
    pub kind: PrinterKind,
}

const fn headings(kind: PrinterKind) -> (&'static str, &'static str) {
    match kind {
        PrinterKind::ThreeD => ("printers.title", "printers.intro"),
        PrinterKind::Document => ("printers.documents_title", "printers.documents_intro"),
    }
}

/// One listing for both printer rooms; `kind` picks the fleet half.
#[function_component(PrintersPage)]
pub fn printers_page(p: &Props) -> Html {
    let query = use_state(String::new);
    let details = use_state(|| None::<Selection<String>>);
    let booking = use_state(|| None::<Selection<String>>);

    let data = p.library.data();
    let printers = data.printers.search(p.kind, &query);
    let (title_key, intro_key) = headings(p.kind);

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_details = {
        let details = details.clone();
        Callback::from(move |id: String| {
            let focus = format!("printer-details-{id}");
            details.set(Some(Selection::new(id, focus)));
        })
    };
    let on_book = {
        let booking = booking.clone();
        Callback::from(move |id: String| {
            let focus = format!("printer-book-{id}");
            booking.set(Some(Selection::new(id, focus)));
        })
    };
    let book_from_details = {
        let details = details.clone();
        let booking = booking.clone();
        Callback::from(move |id: String| {
            let focus = format!("printer-details-{id}");
            details.set(None);
            booking.set(Some(Selection::new(id, focus)));
        })
    };
    let close_details = {
        let details = details.clone();
        Callback::from(move |()| details.set(None))
    };
    let close_booking = {
        let booking = booking.clone();
        Callback::from(move |()| booking.set(None))
    };

    let selected_details = details.as_ref().and_then(|s| data.printers.find(&s.id).cloned());
    let selected_booking = booking.as_ref().and_then(|s| data.printers.find(&s.id).cloned());

    html! {
        <section class="page printers" aria-labelledby="printers-title">
            <h1 id="printers-title">{ t(title_key) }</h1>
            <p class="page__intro">{ t(intro_key) }</p>
            <SearchBar
                id="printer-search"
                value={(*query).clone()}
                placeholder={t("search.placeholder.printers")}
                on_input={on_query}
            />
            if printers.is_empty() {
                { no_results(&query) }
            } else {
                <div class="card-grid">
                    { for printers.iter().map(|printer| html! {
                        <PrinterCard
                            key={printer.id.clone()}
                            printer={(*printer).clone()}
                            on_details={on_details.clone()}
                            on_book={on_book.clone()}
                        />
                    }) }
                </div>
            }
            <PrinterDetailDialog
                open={selected_details.is_some()}
                printer={selected_details}
                on_close={close_details}
                on_book={book_from_details}
                return_focus_id={details.as_ref().map(|s| s.focus.clone())}
            />
            <PrinterBookingDialog
                open={selected_booking.is_some()}
                printer={selected_booking}
                library={p.library.clone()}
                on_close={close_booking}
                return_focus_id={booking.as_ref().map(|s| s.focus.clone())}
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

    fn render(kind: PrinterKind) -> String {
        crate::i18n::set_lang("en");
        let props = Props {
            library: Library::in_memory(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()),
            kind,
        };
        block_on(LocalServerRenderer::<PrintersPage>::with_props(props).render())
    }

    #[test]
    fn three_d_room_lists_only_three_d_printers() {
        let html = render(PrinterKind::ThreeD);
        assert!(html.contains("3D Printers"));
        assert!(html.contains("Prusa i3 MK3S+"));
        assert!(!html.contains("HP LaserJet"));
    }

    #[test]
    fn document_room_lists_office_printers() {
        let html = render(PrinterKind::Document);
        assert!(html.contains("Document Printers"));
        assert!(html.contains("HP LaserJet Pro M404dn"));
        assert!(!html.contains("Prusa"));
    }
}
