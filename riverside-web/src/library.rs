//! Browser wiring for `riverside-core`
//!
//! Provides the local-storage points backend, the cross-tab `storage` event
//! bridge and the shared [`Library`] handle that pages and dialogs receive as
//! a prop.

use std::rc::Rc;

use chrono::NaiveDate;
use riverside_core::{
    BookingReceipt, BookingRequest, ClaimError, ClaimReceipt, LibraryData, LibraryServices,
    MemoryPointsStorage, PointsStore, SimulatedBookingService,
};

pub type Services = LibraryServices<SimulatedBookingService>;

/// Cheap, clonable handle to the loaded catalogs, the points store and the
/// booking desk. Equality is identity, so props holding it only change when
/// the services are rebuilt.
#[derive(Clone)]
pub struct Library {
    services: Rc<Services>,
    today: NaiveDate,
}

impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services) && self.today == other.today
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("today", &self.today)
            .field("store", self.services.store())
            .finish_non_exhaustive()
    }
}

impl Library {
    #[must_use]
    pub fn new(services: Services, today: NaiveDate) -> Self {
        Self {
            services: Rc::new(services),
            today,
        }
    }

    /// Embedded catalogs over an arbitrary store.
    #[must_use]
    pub fn with_store(store: PointsStore, today: NaiveDate) -> Self {
        Self::new(
            Services::from_data(
                LibraryData::load_from_static(),
                SimulatedBookingService::new(),
                store,
            ),
            today,
        )
    }

    /// Embedded catalogs and a throwaway in-memory balance.
    #[must_use]
    pub fn in_memory(today: NaiveDate) -> Self {
        Self::with_store(PointsStore::new(MemoryPointsStorage::new()), today)
    }

    /// Embedded catalogs, the balance in `localStorage`, and the browser's
    /// calendar day.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn browser() -> Self {
        let store = PointsStore::with_config(
            WebPointsStorage,
            riverside_core::PointsConfig::default(),
            browser_rng_seed(),
        );
        Self::with_store(store, browser_today())
    }

    #[must_use]
    pub fn data(&self) -> &LibraryData {
        self.services.data()
    }

    #[must_use]
    pub fn store(&self) -> &PointsStore {
        self.services.store()
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Redeem a reward against the shared balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the reward is unknown or not affordable.
    pub fn claim(&self, reward_id: &str) -> Result<ClaimReceipt, ClaimError> {
        self.services.claim(reward_id)
    }

    pub fn submit(&self, request: &BookingRequest) -> BookingReceipt {
        self.services.submit(request)
    }
}

/// Calendar day according to the browser clock.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    i32::try_from(now.get_full_year())
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()))
        .unwrap_or_else(|| {
            log::warn!("browser clock unreadable, using the earliest booking date");
            LibraryData::load_from_static()
                .pricing
                .printers
                .earliest_booking_date
        })
}

/// Fresh seed for [`PointsStore::set_random`] on every page load.
#[cfg(target_arch = "wasm32")]
fn browser_rng_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits().rotate_left(32)
}

/// `localStorage` behind the points store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPointsStorage;

#[cfg(target_arch = "wasm32")]
impl riverside_core::PointsStorage for WebPointsStorage {
    fn load(&self, key: &str) -> Result<Option<String>, riverside_core::StorageError> {
        let storage = crate::dom::local_storage().map_err(|err| {
            riverside_core::StorageError::Unavailable(crate::dom::js_error_message(&err))
        })?;
        storage.get_item(key).map_err(|err| {
            riverside_core::StorageError::Unavailable(crate::dom::js_error_message(&err))
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), riverside_core::StorageError> {
        let storage = crate::dom::local_storage().map_err(|err| {
            riverside_core::StorageError::Unavailable(crate::dom::js_error_message(&err))
        })?;
        storage.set_item(key, value).map_err(|err| {
            riverside_core::StorageError::Write(crate::dom::js_error_message(&err))
        })
    }
}

/// What a `storage` event means for the balance stored under `key`.
///
/// `None` when the event concerns another key. A missing event key comes
/// from `localStorage.clear()` in another tab and resets the balance.
#[must_use]
pub fn storage_update(
    event_key: Option<&str>,
    new_value: Option<String>,
    key: &str,
) -> Option<Option<String>> {
    match event_key {
        Some(changed) if changed == key => Some(new_value),
        Some(_) => None,
        None => Some(None),
    }
}

/// Forwards `storage` events for the balance key from other tabs into
/// [`PointsStore::apply_external`]. The listener is removed on drop.
pub struct StorageBridge {
    #[cfg(target_arch = "wasm32")]
    listener: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>,
}

impl StorageBridge {
    /// Start listening. Always `None` outside the browser.
    #[must_use]
    pub fn attach(store: PointsStore) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let listener = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
                move |event: web_sys::StorageEvent| {
                    let update = storage_update(
                        event.key().as_deref(),
                        event.new_value(),
                        store.storage_key(),
                    );
                    if let Some(value) = update {
                        store.apply_external(value.as_deref());
                    }
                },
            );
            crate::dom::window()
                .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
                .map_err(|err| log::warn!("storage listener: {}", crate::dom::js_error_message(&err)))
                .ok()?;
            Some(Self { listener })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = store;
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for StorageBridge {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = crate::dom::window().remove_event_listener_with_callback(
            "storage",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 21).unwrap()
    }

    #[test]
    fn clones_compare_equal_and_rebuilds_do_not() {
        let library = Library::in_memory(today());
        assert_eq!(library, library.clone());
        assert_ne!(library, Library::in_memory(today()));
    }

    #[test]
    fn handle_exposes_embedded_catalogs() {
        let library = Library::in_memory(today());
        assert_eq!(library.data().books.len(), 6);
        assert_eq!(library.data().events.events.len(), 4);
        assert_eq!(library.store().read(), 0);
    }

    #[test]
    fn storage_events_for_the_balance_key_carry_the_new_value() {
        assert_eq!(
            storage_update(Some("library_points"), Some("640".into()), "library_points"),
            Some(Some("640".to_string()))
        );
        assert_eq!(
            storage_update(Some("library_points"), None, "library_points"),
            Some(None)
        );
    }

    #[test]
    fn storage_events_for_other_keys_are_ignored() {
        assert_eq!(
            storage_update(Some("riverside.locale"), Some("nl".into()), "library_points"),
            None
        );
    }

    #[test]
    fn cleared_storage_resets_the_balance() {
        let library = Library::in_memory(today());
        let store = library.store();
        store.set(900.0);
        let update = storage_update(None, None, store.storage_key());
        assert_eq!(update, Some(None));
        if let Some(value) = update {
            store.apply_external(value.as_deref());
        }
        assert_eq!(store.balance(), 0);

        let key = store.storage_key();
        let update = storage_update(Some(key), Some("75".into()), key);
        if let Some(value) = update {
            store.apply_external(value.as_deref());
        }
        assert_eq!(store.balance(), 75);
    }

    #[test]
    fn bridge_is_inert_off_browser() {
        let library = Library::in_memory(today());
        assert!(StorageBridge::attach(library.store().clone()).is_none());
    }
}
