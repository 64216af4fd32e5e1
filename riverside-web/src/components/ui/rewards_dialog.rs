use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use crate::library::Library;
use crate::paths::image_src;
use crate::points::use_points_balance;
use riverside_core::{Affordability, ClaimError, Reward};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub library: Library,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn claim_label(state: Affordability) -> String {
    match state {
        Affordability::Claimable => t("rewards.claim"),
        Affordability::Short { shortfall } => {
            let shortfall = shortfall.to_string();
            let args = BTreeMap::from([("shortfall", shortfall.as_str())]);
            tr("rewards.short", Some(&args))
        }
    }
}

fn announce(message: &str) {
    crate::a11y::set_status(message);
}

/// Rewards in catalog order; each button is live against the balance.
#[function_component(RewardsDialog)]
pub fn rewards_dialog(p: &Props) -> Html {
    let balance = use_points_balance(p.library.store());
    let last_claim = use_state(|| None::<String>);

    let on_close = {
        let cb = p.on_close.clone();
        let last_claim = last_claim.clone();
        Callback::from(move |()| {
            last_claim.set(None);
            cb.emit(());
        })
    };

    let render_reward = |(reward, state): (&Reward, Affordability)| {
        let onclick = {
            let library = p.library.clone();
            let reward_id = reward.id.clone();
            let last_claim = last_claim.clone();
            Callback::from(move |_: MouseEvent| match library.claim(&reward_id) {
                Ok(receipt) => {
                    let balance = receipt.balance_after.to_string();
                    let args = BTreeMap::from([
                        ("title", receipt.title.as_str()),
                        ("balance", balance.as_str()),
                    ]);
                    let message = tr("rewards.claimed", Some(&args));
                    announce(&message);
                    last_claim.set(Some(message));
                }
                Err(ClaimError::InsufficientBalance { reward_id, shortfall }) => {
                    log::warn!("claim of {reward_id} refused, {shortfall} short");
                }
                Err(err) => log::warn!("claim failed: {err}"),
            })
        };
        let cost = reward.cost.to_string();
        let cost_args = BTreeMap::from([("cost", cost.as_str())]);
        let locked = !state.is_claimable();
        html! {
            <li class={classes!("reward", locked.then_some("reward--locked"))}>
                <img class="reward__image" src={image_src(&reward.image_url)} alt="" loading="lazy" />
                <div class="reward__body">
                    <h3>{ reward.title.clone() }</h3>
                    <p>{ reward.description.clone() }</p>
                    <span class="reward__cost">{ tr("rewards.cost", Some(&cost_args)) }</span>
                </div>
                <button
                    type="button"
                    id={format!("claim-{}", reward.id)}
                    class="btn btn--primary"
                    disabled={locked}
                    {onclick}
                >
                    { claim_label(state) }
                </button>
            </li>
        }
    };

    let balance_text = {
        let balance = balance.to_string();
        let args = BTreeMap::from([("balance", balance.as_str())]);
        tr("rewards.balance", Some(&args))
    };

    html! {
        <Modal
            open={p.open}
            title={t("rewards.title")}
            description={Some(AttrValue::from(t("rewards.description")))}
            on_close={on_close}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("rewards-dialog")}
        >
            <p class="rewards-dialog__balance">{ balance_text }</p>
            if let Some(message) = (*last_claim).clone() {
                <p class="rewards-dialog__claimed" role="status">{ message }</p>
            }
            <ul class="reward-list">
                { for p.library.data().rewards.with_affordability(balance).into_iter().map(render_reward) }
            </ul>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use riverside_core::{MemoryPointsStorage, PointsStore};
    use yew::LocalServerRenderer;

    fn render(balance: &str) -> String {
        crate::i18n::set_lang("en");
        let store = PointsStore::new(MemoryPointsStorage::with_entry("library_points", balance));
        let props = Props {
            open: true,
            library: Library::with_store(store, NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()),
            on_close: Callback::noop(),
            return_focus_id: None,
        };
        block_on(LocalServerRenderer::<RewardsDialog>::with_props(props).render())
    }

    #[test]
    fn locked_rewards_show_their_shortfall() {
        let html = render("120");
        assert!(html.contains("You have 120 points"));
        // 100 and 50 are claimable; 150 and 250 are not.
        assert_eq!(html.matches("reward--locked").count(), 2);
        assert!(html.contains("30 short"));
        assert!(html.contains("130 short"));
    }

    #[test]
    fn rewards_keep_catalog_order() {
        let html = render("0");
        let positions: Vec<usize> = ["claim-gift-10", "claim-extend-loan", "claim-merch-pack", "claim-gift-25"]
            .iter()
            .map(|id| html.find(id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn claim_label_switches_on_affordability() {
        crate::i18n::set_lang("en");
        assert_eq!(claim_label(Affordability::Claimable), "Claim");
        assert_eq!(claim_label(Affordability::Short { shortfall: 7 }), "7 short");
    }
}
