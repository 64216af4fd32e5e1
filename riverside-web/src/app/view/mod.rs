mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::header::{LEADERBOARD_BUTTON_ID, REWARDS_BUTTON_ID};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Switch;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let library = state.library.clone();
    let render = move |route: Route| crate::app::switch(route, &library);

    html! {
        <>
            <crate::components::header::Header
                store={state.library.store().clone()}
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                high_contrast={*state.high_contrast}
                on_toggle_hc={handlers.toggle_hc.clone()}
                on_open_rewards={handlers.open_rewards.clone()}
                on_open_leaderboard={handlers.open_leaderboard.clone()}
            />
            <main id="main" role="main" tabindex="-1">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::status_region_id()} class="sr-only" role="status" aria-live="polite"></div>
                <Switch<Route> {render} />
            </main>
            <crate::components::ui::rewards_dialog::RewardsDialog
                open={*state.show_rewards}
                library={state.library.clone()}
                on_close={handlers.close_rewards.clone()}
                return_focus_id={Some(AttrValue::from(REWARDS_BUTTON_ID))}
            />
            <crate::components::ui::leaderboard_dialog::LeaderboardDialog
                open={*state.show_leaderboard}
                leaderboard={state.library.data().leaderboard.clone()}
                on_close={handlers.close_leaderboard.clone()}
                return_focus_id={Some(AttrValue::from(LEADERBOARD_BUTTON_ID))}
            />
            <crate::components::footer::Footer />
        </>
    }
}
