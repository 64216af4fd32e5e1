pub mod books;
pub mod escape_rooms;
pub mod not_found;
pub mod printers;

use crate::i18n::tr;
use std::collections::BTreeMap;
use yew::prelude::*;

/// Item picked from a listing plus the control focus returns to when its
/// dialog closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<K> {
    pub id: K,
    pub focus: AttrValue,
}

impl<K> Selection<K> {
    pub fn new(id: K, focus: impl Into<AttrValue>) -> Self {
        Self {
            id,
            focus: focus.into(),
        }
    }
}

/// Empty-state message for a listing filtered down to nothing.
#[must_use]
pub fn no_results(query: &str) -> Html {
    let args = BTreeMap::from([("query", query.trim())]);
    html! {
        <p class="listing__empty" role="status">{ tr("search.no_results", Some(&args)) }</p>
    }
}
