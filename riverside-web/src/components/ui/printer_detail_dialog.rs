use crate::components::modal::Modal;
use crate::i18n::t;
use crate::paths::image_src;
use riverside_core::{Filament, Printer};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub printer: Option<Printer>,
    pub on_close: Callback<()>,
    /// Receives the printer id; the page swaps this dialog for booking.
    pub on_book: Callback<String>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn spec_row(label_key: &str, value: Option<&String>) -> Html {
    value.map_or_else(Html::default, |value| {
        html! {
            <>
                <dt>{ t(label_key) }</dt>
                <dd>{ value.clone() }</dd>
            </>
        }
    })
}

fn filament_item(filament: &Filament) -> Html {
    html! {
        <li class={classes!("filament", format!("filament--{}", filament.status.key()))}>
            <span class="filament__swatch" style={format!("background-color: {}", filament.color)} aria-hidden="true"></span>
            <span class="filament__name">{ filament.name.clone() }</span>
            <span class="filament__status">{ t(&format!("printers.filament_status.{}", filament.status.key())) }</span>
        </li>
    }
}

#[function_component(PrinterDetailDialog)]
pub fn printer_detail_dialog(p: &Props) -> Html {
    let Some(printer) = p.printer.as_ref() else {
        return Html::default();
    };
    let book = {
        let cb = p.on_book.clone();
        let id = printer.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    html! {
        <Modal
            open={p.open}
            title={printer.name.clone()}
            description={Some(AttrValue::from(printer.description.clone()))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("printer-detail")}
        >
            <img class="printer-detail__image" src={image_src(&printer.image_url)} alt="" />
            <dl class="printer-detail__specs">
                { spec_row("printers.model", Some(&printer.model)) }
                { spec_row("printers.build_volume", printer.build_volume.as_ref()) }
                { spec_row("printers.resolution", printer.resolution.as_ref()) }
                if !printer.materials.is_empty() {
                    <>
                        <dt>{ t("printers.materials") }</dt>
                        <dd>{ printer.materials.join(", ") }</dd>
                    </>
                }
            </dl>
            if !printer.filaments.is_empty() {
                <>
                    <h3>{ t("printers.filaments") }</h3>
                    <ul class="filament-list">
                        { for printer.filaments.iter().map(filament_item) }
                    </ul>
                </>
            }
            <div class="modal__actions">
                <button type="button" class="btn btn--primary" disabled={!printer.available} onclick={book}>
                    { t("printers.book") }
                </button>
            </div>
        </Modal>
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
            open: true,
            printer: PrinterFleet::load_from_static().find(id).cloned(),
            on_close: Callback::noop(),
            on_book: Callback::noop(),
            return_focus_id: None,
        };
        block_on(LocalServerRenderer::<PrinterDetailDialog>::with_props(props).render())
    }

    #[test]
    fn three_d_printer_lists_specs_and_spools() {
        let html = render("prusa-mk3s");
        assert!(html.contains("Build volume"));
        assert!(html.contains("Filament stock"));
        assert!(html.contains("Low stock"));
        assert!(html.contains("filament--empty"));
    }

    #[test]
    fn document_printer_has_no_spool_section() {
        let html = render("epson-et-2760");
        assert!(!html.contains("Build volume"));
        assert!(!html.contains("Filament stock"));
        assert!(html.contains("Photo Paper"));
    }
}
