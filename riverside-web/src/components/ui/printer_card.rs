use crate::i18n::t;
use crate::paths::image_src;
use riverside_core::Printer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub printer: Printer,
    /// Both callbacks receive the printer id.
    pub on_details: Callback<String>,
    pub on_book: Callback<String>,
}

#[function_component(PrinterCard)]
pub fn printer_card(p: &Props) -> Html {
    let printer = &p.printer;
    let emit = |cb: &Callback<String>| {
        let cb = cb.clone();
        let id = printer.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let (status_class, status_key) = if printer.available {
        ("badge--available", "printers.available")
    } else {
        ("badge--unavailable", "printers.unavailable")
    };

    html! {
        <article
            class={classes!("card", "printer-card", (!printer.available).then_some("printer-card--unavailable"))}
            aria-labelledby={format!("printer-{}-title", printer.id)}
        >
            <img class="card__image" src={image_src(&printer.image_url)} alt="" loading="lazy" />
            <div class="card__body">
                <span class={classes!("badge", status_class)}>{ t(status_key) }</span>
                <h3 id={format!("printer-{}-title", printer.id)}>{ printer.name.clone() }</h3>
                <p class="printer-card__model">{ printer.model.clone() }</p>
                <p>{ printer.description.clone() }</p>
                if !printer.materials.is_empty() {
                    <ul class="tag-list" aria-label={t("printers.materials")}>
                        { for printer.materials.iter().map(|m| html! { <li class="tag">{ m.clone() }</li> }) }
                    </ul>
                }
                <div class="card__actions">
                    <button type="button" id={format!("printer-details-{}", printer.id)} class="btn" onclick={emit(&p.on_details)}>
                        { t("printers.details") }
                    </button>
                    <button
                        type="button"
                        id={format!("printer-book-{}", printer.id)}
                        class="btn btn--primary"
                        disabled={!printer.available}
                        onclick={emit(&p.on_book)}
                    >
                        { t("printers.book") }
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use riverside_core::PrinterFleet;
    use yew::LocalServerRenderer;

    fn render(id: &str) -> String {
        crate::i18n::set_lang("en");
        let props = Props {
            printer: PrinterFleet::load_from_static().find(id).cloned().unwrap(),
            on_details: Callback::noop(),
            on_book: Callback::noop(),
        };
        block_on(LocalServerRenderer::<PrinterCard>::with_props(props).render())
    }

    #[test]
    fn available_printer_can_be_booked() {
        let html = render("prusa-mk3s");
        assert!(html.contains("Prusa i3 MK3S+"));
        assert!(html.contains(">Available<"));
        assert!(html.contains("PETG"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn unavailable_printer_is_marked_and_locked() {
        let html = render("photon-mono-x");
        assert!(html.contains("Unavailable"));
        assert!(html.contains("printer-card--unavailable"));
        assert!(html.contains("disabled"));
    }
}
