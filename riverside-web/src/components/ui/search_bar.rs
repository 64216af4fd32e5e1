use super::fields::input_value;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

/// Controlled search box. Filtering happens on every keystroke; the caller
/// owns the query.
#[function_component(SearchBar)]
pub fn search_bar(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| cb.emit(input_value(&e)))
    };
    let on_clear = {
        let cb = p.on_input.clone();
        Callback::from(move |_: MouseEvent| cb.emit(String::new()))
    };
    html! {
        <div class="search-bar" role="search">
            <label for={p.id.clone()} class="sr-only">{ t("search.label") }</label>
            <input
                id={p.id.clone()}
                type="search"
                value={p.value.clone()}
                placeholder={p.placeholder.clone()}
                {oninput}
            />
            if !p.value.is_empty() {
                <button type="button" class="search-bar__clear" aria-label={t("search.clear")} onclick={on_clear}>
                    {"×"}
                </button>
            }
        </div>
    }
}
