use crate::i18n::{t, tr_count};
use crate::points::use_points_balance;
use riverside_core::PointsStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: PointsStore,
}

/// Live balance badge. Read-only; every mounted instance follows the store.
#[function_component(PointsDisplay)]
pub fn points_display(p: &Props) -> Html {
    let balance = use_points_balance(&p.store);
    html! {
        <div class="points-display" role="status" aria-live="polite" aria-label={t("points.aria")}>
            <span class="points-display__icon" aria-hidden="true">{"★"}</span>
            <span class="points-display__value">{ tr_count("points.count", balance) }</span>
        </div>
    }
}
