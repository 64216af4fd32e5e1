use crate::components::ui::fields::select_value;
use crate::components::ui::points_display::PointsDisplay;
use crate::i18n::{locales, t};
use crate::router::Route;
use riverside_core::PointsStore;
use yew::prelude::*;
use yew_router::prelude::*;

/// Ids of the header buttons that open dialogs; focus returns here on close.
pub const REWARDS_BUTTON_ID: &str = "rewards-open-btn";
pub const LEADERBOARD_BUTTON_ID: &str = "leaderboard-open-btn";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: PointsStore,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    #[prop_or_default]
    pub high_contrast: bool,
    #[prop_or_default]
    pub on_toggle_hc: Callback<bool>,
    pub on_open_rewards: Callback<()>,
    pub on_open_leaderboard: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let route = use_route::<Route>();
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    let toggle_hc = {
        let cb = p.on_toggle_hc.clone();
        let next = !p.high_contrast;
        Callback::from(move |_: MouseEvent| cb.emit(next))
    };
    let open = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="skip-link sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <img class="logo" src={crate::paths::asset_path("static/img/logo.svg")} alt="" />
                    <span class="site-title">{ t("app.title") }</span>
                </div>
                <nav aria-label={t("nav.label")} class="site-nav">
                    <ul>
                        { for Route::NAV.iter().map(|target| {
                            let current = route.as_ref() == Some(target);
                            html! {
                                <li>
                                    <Link<Route>
                                        to={target.clone()}
                                        classes={classes!("nav-link", current.then_some("nav-link--active"))}
                                    >
                                        { t(target.label_key()) }
                                    </Link<Route>>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
                <div class="header-right">
                    <PointsDisplay store={p.store.clone()} />
                    <button id={REWARDS_BUTTON_ID} type="button" class="btn" onclick={open(&p.on_open_rewards)}>
                        { t("rewards.open") }
                    </button>
                    <button id={LEADERBOARD_BUTTON_ID} type="button" class="btn" onclick={open(&p.on_open_leaderboard)}>
                        { t("leaderboard.open") }
                    </button>
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change}>
                        { for locales().iter().map(|locale| html! {
                            <option value={locale.code} selected={locale.code == p.current_lang}>{ locale.name }</option>
                        }) }
                    </select>
                    <button
                        type="button"
                        class="btn btn--ghost hc-toggle"
                        aria-pressed={p.high_contrast.to_string()}
                        onclick={toggle_hc}
                    >
                        { t("nav.high_contrast") }
                    </button>
                </div>
            </div>
        </header>
    }
}
