//! Hooks that keep components in step with the points balance.
use riverside_core::PointsStore;
use yew::prelude::*;

/// Current balance of `store`, re-rendering on every change.
///
/// Reads on first render and again whenever a (new) store is subscribed, so
/// changes made before the subscription existed still show. The subscription
/// is dropped when the component unmounts or the store changes.
#[hook]
pub fn use_points_balance(store: &PointsStore) -> u64 {
    let balance = use_state(|| store.read());
    {
        let setter = balance.setter();
        use_effect_with(store.clone(), move |store| {
            setter.set(store.read());
            let subscription = store.subscribe(move |event| setter.set(event.balance));
            move || drop(subscription)
        });
    }
    *balance
}

/// Bridge cross-tab `storage` events into `store` for the lifetime of the
/// calling component.
#[hook]
pub fn use_cross_tab_sync(store: &PointsStore) {
    use_effect_with(store.clone(), |store| {
        let bridge = crate::library::StorageBridge::attach(store.clone());
        move || drop(bridge)
    });
}
