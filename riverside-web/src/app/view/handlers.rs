use crate::app::state::AppState;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
    pub open_rewards: Callback<()>,
    pub close_rewards: Callback<()>,
    pub open_leaderboard: Callback<()>,
    pub close_leaderboard: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            lang_change: build_lang_change(state),
            toggle_hc: build_toggle_hc(state),
            open_rewards: build_show(&state.show_rewards, true),
            close_rewards: build_show(&state.show_rewards, false),
            open_leaderboard: build_show(&state.show_leaderboard, true),
            close_leaderboard: build_show(&state.show_leaderboard, false),
        }
    }
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

fn build_toggle_hc(state: &AppState) -> Callback<bool> {
    let high_contrast = state.high_contrast.clone();
    Callback::from(move |next: bool| {
        crate::a11y::set_high_contrast(next);
        high_contrast.set(next);
    })
}

fn build_show(flag: &UseStateHandle<bool>, value: bool) -> Callback<()> {
    let flag = flag.clone();
    Callback::from(move |()| flag.set(value))
}
