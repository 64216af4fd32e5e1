use crate::components::modal::Modal;
use crate::i18n::{t, tr};
use riverside_core::{Leaderboard, RankedEntry};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub leaderboard: Leaderboard,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn render_row(ranked: &RankedEntry<'_>) -> Html {
    let medal = ranked.medal.map(|medal| {
        let points = medal.points().to_string();
        let args = BTreeMap::from([("points", points.as_str())]);
        html! {
            <span class={classes!("medal", format!("medal--{}", medal.key()))}>
                <span role="img" aria-label={t(&format!("leaderboard.medal.{}", medal.key()))}>{ medal.icon() }</span>
                <span class="medal__points">{ tr("leaderboard.medal_points", Some(&args)) }</span>
            </span>
        }
    });
    html! {
        <tr class={classes!(ranked.medal.is_some().then_some("leaderboard__row--podium"))}>
            <td>{ ranked.rank }</td>
            <td>
                <strong>{ ranked.entry.team_name.clone() }</strong>
                { medal.unwrap_or_default() }
            </td>
            <td>{ ranked.entry.members.join(", ") }</td>
            <td><time>{ ranked.entry.time.clone() }</time></td>
            <td>{ ranked.entry.room.clone() }</td>
        </tr>
    }
}

#[function_component(LeaderboardDialog)]
pub fn leaderboard_dialog(p: &Props) -> Html {
    html! {
        <Modal
            open={p.open}
            title={t("leaderboard.title")}
            description={Some(AttrValue::from(t("leaderboard.description")))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class={classes!("leaderboard-dialog")}
        >
            <table class="leaderboard">
                <thead>
                    <tr>
                        <th scope="col">{ t("leaderboard.rank") }</th>
                        <th scope="col">{ t("leaderboard.team") }</th>
                        <th scope="col">{ t("leaderboard.members") }</th>
                        <th scope="col">{ t("leaderboard.time") }</th>
                        <th scope="col">{ t("leaderboard.room") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for p.leaderboard.ranked().iter().map(render_row) }
                </tbody>
            </table>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn podium_gets_three_medals_in_time_order() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            leaderboard: Leaderboard::load_from_static(),
            on_close: Callback::noop(),
            return_focus_id: None,
        };
        let html = block_on(LocalServerRenderer::<LeaderboardDialog>::with_props(props).render());
        assert_eq!(html.matches("leaderboard__row--podium").count(), 3);
        assert!(html.contains("100 pts"));
        assert!(html.contains("Bronze medal"));
        let first = html.find("The Puzzlers").unwrap();
        let last = html.find("Mystery Solvers").unwrap();
        assert!(first < last);
    }
}
