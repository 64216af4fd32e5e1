use crate::i18n::{fmt_currency, t, tr};
use crate::paths::image_src;
use riverside_core::Book;
use std::collections::BTreeMap;
use yew::prelude::*;

/// Tags shown on a listing card before the rest are cut.
const CARD_TAG_LIMIT: usize = 3;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub book: Book,
    /// Both callbacks receive the book id.
    pub on_details: Callback<u32>,
    pub on_reserve: Callback<u32>,
}

#[must_use]
pub fn by_author(book: &Book) -> String {
    let args = BTreeMap::from([("author", book.author.as_str())]);
    tr("books.by", Some(&args))
}

/// Price with its emphasis class: escape-room features and sales stand out.
#[must_use]
pub fn price_tag(book: &Book) -> Html {
    html! {
        <span class={classes!("price", format!("price--{}", book.price_tone().key()))}>
            { fmt_currency(book.price_cents) }
        </span>
    }
}

#[must_use]
pub fn availability_badge(book: &Book) -> Html {
    let key = book.availability.key();
    html! {
        <span class={classes!("badge", format!("badge--{key}"))}>
            { t(&format!("books.availability.{key}")) }
        </span>
    }
}

#[function_component(BookCard)]
pub fn book_card(p: &Props) -> Html {
    let book = &p.book;
    let emit = |cb: &Callback<u32>| {
        let cb = cb.clone();
        let id = book.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    html! {
        <article class="card book-card" aria-labelledby={format!("book-{}-title", book.id)}>
            <img class="book-card__cover" src={image_src(&book.cover_url)} alt="" loading="lazy" />
            <div class="card__body">
                <div class="card__badges">
                    { availability_badge(book) }
                    if book.on_sale {
                        <span class="badge badge--sale">{ t("books.sale") }</span>
                    }
                    if book.featured_in_escape_room {
                        <span class="badge badge--escape">{ t("books.escape_room") }</span>
                    }
                </div>
                <h3 id={format!("book-{}-title", book.id)}>{ book.title.clone() }</h3>
                <p class="book-card__author">{ by_author(book) }</p>
                { price_tag(book) }
                <ul class="tag-list" aria-label={t("books.tags")}>
                    { for book.card_tags(CARD_TAG_LIMIT).iter().map(|tag| html! { <li class="tag">{ tag.clone() }</li> }) }
                </ul>
                <div class="card__actions">
                    <button type="button" id={format!("book-details-{}", book.id)} class="btn" onclick={emit(&p.on_details)}>
                        { t("books.details") }
                    </button>
                    <button type="button" id={format!("book-reserve-{}", book.id)} class="btn btn--primary" onclick={emit(&p.on_reserve)}>
                        { t("books.reserve") }
                    </button>
                </div>
            </div>
        </article>
    }
}
