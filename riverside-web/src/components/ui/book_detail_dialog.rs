use super::book_card::{availability_badge, by_author, price_tag};
use crate::components::modal::Modal;
use crate::i18n::t;
use crate::paths::image_src;
use riverside_core::Book;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub book: Option<Book>,
    pub on_close: Callback<()>,
    /// Receives the book id; the page swaps this dialog for the reservation.
    pub on_reserve: Callback<u32>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

#[function_component(BookDetailDialog)]
pub fn book_detail_dialog(p: &Props) -> Html {
    let Some(book) = p.book.as_ref() else {
        return Html::default();
    };
    let reserve = {
        let cb = p.on_reserve.clone();
        let id = book.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    html! {
        <Modal
            open={p.open}
            title={book.title.clone()}
            description={Some(AttrValue::from(by_author(book)))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("book-detail")}
        >
            <div class="book-detail__layout">
                <img class="book-detail__cover" src={image_src(&book.cover_url)} alt="" />
                <div>
                    <p>{ book.description.clone() }</p>
                    <dl>
                        <dt>{ t("books.price") }</dt>
                        <dd>{ price_tag(book) }</dd>
                        <dt>{ t("books.tags") }</dt>
                        <dd>{ book.tags.join(", ") }</dd>
                    </dl>
                    { availability_badge(book) }
                </div>
            </div>
            <div class="modal__actions">
                <button type="button" class="btn btn--primary" onclick={reserve}>
                    { t("books.reserve") }
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use riverside_core::BookCatalog;
    use yew::LocalServerRenderer;

    #[test]
    fn detail_lists_every_tag() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            book: BookCatalog::load_from_static().find(3).cloned(),
            on_close: Callback::noop(),
            on_reserve: Callback::noop(),
            return_focus_id: None,
        };
        let html = block_on(LocalServerRenderer::<BookDetailDialog>::with_props(props).render());
        assert!(html.contains("System Design, Databases, Architecture"));
        assert!(html.contains("price--regular"));
        assert!(html.contains("Martin Kleppmann"));
    }
}
