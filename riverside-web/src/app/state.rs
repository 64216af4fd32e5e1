use crate::library::Library;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub library: Library,
    pub current_language: UseStateHandle<String>,
    pub high_contrast: UseStateHandle<bool>,
    pub show_rewards: UseStateHandle<bool>,
    pub show_leaderboard: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state(library: Library) -> AppState {
    AppState {
        library,
        current_language: use_state(crate::i18n::current_lang),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
        show_rewards: use_state(|| false),
        show_leaderboard: use_state(|| false),
    }
}
