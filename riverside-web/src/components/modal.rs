use crate::a11y::{restore_focus, trap_focus_in, wrap_tab_focus};
use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Element that receives focus again once the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Accessible dialog shell: backdrop, labelled container, focus trap and
/// Escape to close. Renders nothing while closed.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_id = format!("modal-{}", *modal_id);
    let prev_open = use_mut_ref(|| false);

    {
        let container_id = container_id.clone();
        use_effect_with(
            (props.open, props.return_focus_id.clone()),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open.borrow();
                *prev_open.borrow_mut() = *is_open;
                if *is_open && !was_open {
                    trap_focus_in(&container_id);
                } else if was_open && !*is_open && let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
                || {}
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        let container_id = container_id.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => {
                e.prevent_default();
                cb.emit(());
            }
            "Tab" => {
                if wrap_tab_focus(&container_id, e.shift_key()) {
                    e.prevent_default();
                }
            }
            _ => {}
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class={classes!("modal", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                tabindex="-1"
                onclick={stop}
                onkeydown={on_keydown}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={t("ui.close")} onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| html! {
                    <p id={desc_id.clone()} class="modal__description">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
