use crate::components::ui::book_card::BookCard;
use crate::components::ui::book_detail_dialog::BookDetailDialog;
use crate::components::ui::book_reserve_dialog::BookReserveDialog;
use crate::components::ui::search_bar::SearchBar;
use crate::i18n::{t, tr_count};
use crate::library::Library;
use crate::pages::{Selection, no_results};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Normal,
    Ai,
}

impl SearchMode {
    pub const ALL: [Self; 2] = [Self::Normal, Self::Ai];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ai => "ai",
        }
    }
}

/// Each mode keeps its own query; both filter with the same predicate.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BookSearch {
    pub mode: SearchMode,
    pub normal: String,
    pub ai: String,
}

impl BookSearch {
    #[must_use]
    pub fn query(&self) -> &str {
        match self.mode {
            SearchMode::Normal => &self.normal,
            SearchMode::Ai => &self.ai,
        }
    }

    #[must_use]
    pub fn with_query(&self, value: String) -> Self {
        let mut next = self.clone();
        match self.mode {
            SearchMode::Normal => next.normal = value,
            SearchMode::Ai => next.ai = value,
        }
        next
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.query().trim().is_empty()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub library: Library,
}

#[function_component(BooksPage)]
pub fn books_page(p: &Props) -> Html {
    let search = use_state(BookSearch::default);
    let details = use_state(|| None::<Selection<u32>>);
    let reserve = use_state(|| None::<Selection<u32>>);

    let data = p.library.data();
    let books = data.books.search(search.query());

    let on_query = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(search.with_query(value)))
    };
    let mode_button = |mode: SearchMode| {
        let search = search.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            search.set(BookSearch {
                mode,
                ..(*search).clone()
            });
        });
        html! {
            <button
                type="button"
                role="tab"
                id={format!("book-mode-{}", mode.key())}
                class={classes!("tab", (search.mode == mode).then_some("tab--active"))}
                aria-selected={(search.mode == mode).to_string()}
                {onclick}
            >
                { t(&format!("books.mode.{}", mode.key())) }
            </button>
        }
    };
    let on_details = {
        let details = details.clone();
        Callback::from(move |id: u32| details.set(Some(Selection::new(id, format!("book-details-{id}")))))
    };
    let on_reserve = {
        let reserve = reserve.clone();
        Callback::from(move |id: u32| reserve.set(Some(Selection::new(id, format!("book-reserve-{id}")))))
    };
    let reserve_from_details = {
        let details = details.clone();
        let reserve = reserve.clone();
        Callback::from(move |id: u32| {
            details.set(None);
            reserve.set(Some(Selection::new(id, format!("book-details-{id}"))));
        })
    };
    let close_details = {
        let details = details.clone();
        Callback::from(move |()| details.set(None))
    };
    let close_reserve = {
        let reserve = reserve.clone();
        Callback::from(move |()| reserve.set(None))
    };

    let selected_details = details.as_ref().and_then(|s| data.books.find(s.id).cloned());
    let selected_reserve = reserve.as_ref().and_then(|s| data.books.find(s.id).cloned());
    let heading = if search.is_searching() {
        t("books.results")
    } else {
        t("books.collection")
    };
    let placeholder = match search.mode {
        SearchMode::Normal => t("search.placeholder.books"),
        SearchMode::Ai => t("books.ai_hint"),
    };

    html! {
        <section class="page books" aria-labelledby="books-title">
            <h1 id="books-title">{ t("books.title") }</h1>
            <p class="page__intro">{ t("books.intro") }</p>
            <div class="tabs" role="tablist" aria-label={t("books.mode.label")}>
                { for SearchMode::ALL.into_iter().map(mode_button) }
            </div>
            <SearchBar
                id={format!("book-search-{}", search.mode.key())}
                value={search.query().to_string()}
                placeholder={placeholder}
                on_input={on_query}
            />
            <div class="listing__header">
                <h2>{ heading }</h2>
                <span class="listing__count">{ tr_count("books.count", u64::try_from(books.len()).unwrap_or(u64::MAX)) }</span>
            </div>
            if books.is_empty() {
                { no_results(search.query()) }
            } else {
                <div class="card-grid">
                    { for books.iter().map(|book| html! {
                        <BookCard
                            key={book.id}
                            book={(*book).clone()}
                            on_details={on_details.clone()}
                            on_reserve={on_reserve.clone()}
                        />
                    }) }
                </div>
            }
            <BookDetailDialog
                open={selected_details.is_some()}
                book={selected_details}
                on_close={close_details}
                on_reserve={reserve_from_details}
                return_focus_id={details.as_ref().map(|s| s.focus.clone())}
            />
            <BookReserveDialog
                open={selected_reserve.is_some()}
                book={selected_reserve}
                library={p.library.clone()}
                on_close={close_reserve}
                return_focus_id={reserve.as_ref().map(|s| s.focus.clone())}
            />
        </section>
    }
}
