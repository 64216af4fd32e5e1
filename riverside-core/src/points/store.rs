//! The points balance service: one mutation surface, one change channel.
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::storage::PointsStorage;
use crate::constants::{DEFAULT_SEED_BALANCE, POINTS_STORAGE_KEY};
use crate::numbers::{apply_delta, floor_f64_to_balance, parse_balance};

/// Where the balance lives and what a first run starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsConfig {
    pub storage_key: String,
    pub seed_balance: u64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            storage_key: POINTS_STORAGE_KEY.to_string(),
            seed_balance: DEFAULT_SEED_BALANCE,
        }
    }
}

/// Whether a change was made through this store or observed from another tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeOrigin {
    Local,
    External,
}

/// Payload delivered to every subscriber after the balance changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsEvent {
    pub balance: u64,
    pub previous: u64,
    pub origin: ChangeOrigin,
}

impl PointsEvent {
    /// Signed difference between the new and previous balance.
    #[must_use]
    pub fn delta(&self) -> i128 {
        i128::from(self.balance) - i128::from(self.previous)
    }
}

type Listener = Rc<dyn Fn(&PointsEvent)>;

struct Inner {
    config: PointsConfig,
    storage: Box<dyn PointsStorage>,
    cached: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, Listener>>,
    next_listener_id: Cell<u64>,
    rng: RefCell<ChaCha8Rng>,
}

/// Shared handle to the points balance.
///
/// Clones point at the same balance and the same subscriber set. All reads
/// and writes are synchronous; the store is meant to live on a single UI
/// thread.
#[derive(Clone)]
pub struct PointsStore {
    inner: Rc<Inner>,
}

impl PartialEq for PointsStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for PointsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointsStore")
            .field("storage_key", &self.inner.config.storage_key)
            .field("cached", &self.inner.cached.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PointsStore {
    /// Create a store with the default key and seed balance.
    pub fn new(storage: impl PointsStorage + 'static) -> Self {
        Self::with_config(storage, PointsConfig::default(), 0)
    }

    /// Create a store with an explicit configuration. `rng_seed` drives
    /// [`PointsStore::set_random`].
    pub fn with_config(storage: impl PointsStorage + 'static, config: PointsConfig, rng_seed: u64) -> Self {
        let store = Self {
            inner: Rc::new(Inner {
                cached: Cell::new(config.seed_balance),
                config,
                storage: Box::new(storage),
                listeners: RefCell::new(BTreeMap::new()),
                next_listener_id: Cell::new(0),
                rng: RefCell::new(ChaCha8Rng::seed_from_u64(rng_seed)),
            }),
        };
        store.read();
        store
    }

    #[must_use]
    pub fn config(&self) -> &PointsConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.inner.config.storage_key
    }

    /// Read the balance from storage, writing the seed value first if the key
    /// is absent. Malformed values read as 0. If storage is unreachable the
    /// last known value is returned.
    pub fn read(&self) -> u64 {
        let key = self.storage_key();
        let value = match self.inner.storage.load(key) {
            Ok(Some(raw)) => parse_balance(&raw),
            Ok(None) => {
                let seed = self.inner.config.seed_balance;
                if let Err(err) = self.inner.storage.save(key, &seed.to_string()) {
                    log::warn!("could not initialize points balance: {err}");
                }
                seed
            }
            Err(err) => {
                log::warn!("could not read points balance: {err}");
                self.inner.cached.get()
            }
        };
        self.inner.cached.set(value);
        value
    }

    /// Last value this store read, wrote, or received from another tab.
    #[must_use]
    pub fn balance(&self) -> u64 {
        self.inner.cached.get()
    }

    /// Add `delta` (which may be negative) to the stored balance, clamping at
    /// zero, then persist and notify. Returns the new balance.
    pub fn add(&self, delta: i64) -> u64 {
        let current = self.read();
        self.commit(apply_delta(current, delta), ChangeOrigin::Local)
    }

    /// Overwrite the balance with `max(0, floor(value))`.
    pub fn set(&self, value: f64) -> u64 {
        self.commit(floor_f64_to_balance(value), ChangeOrigin::Local)
    }

    /// Overwrite the balance with a uniform pick from `[min, max]`; the bounds
    /// are swapped if given in the wrong order.
    pub fn set_random(&self, min: u64, max: u64) -> u64 {
        let value = {
            let mut rng = self.inner.rng.borrow_mut();
            pick_in_range(&mut *rng, min, max)
        };
        self.commit(value, ChangeOrigin::Local)
    }

    /// Same as [`PointsStore::set_random`] with a caller-supplied generator.
    pub fn set_random_with<R: Rng + ?Sized>(&self, rng: &mut R, min: u64, max: u64) -> u64 {
        let value = pick_in_range(rng, min, max);
        self.commit(value, ChangeOrigin::Local)
    }

    /// Apply a value written by another tab. The raw string is coerced like a
    /// stored value; a removed key reads as 0. Nothing is written back.
    pub fn apply_external(&self, raw: Option<&str>) -> u64 {
        let value = raw.map_or(0, parse_balance);
        let previous = self.inner.cached.replace(value);
        log::debug!("points balance {previous} -> {value} (external)");
        self.notify(&PointsEvent {
            balance: value,
            previous,
            origin: ChangeOrigin::External,
        });
        value
    }

    /// Register a listener for every balance change, local or external. The
    /// listener stays registered until the returned [`Subscription`] drops.
    #[must_use = "dropping the subscription immediately unsubscribes"]
    pub fn subscribe(&self, listener: impl Fn(&PointsEvent) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, Rc::new(listener));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn commit(&self, value: u64, origin: ChangeOrigin) -> u64 {
        if let Err(err) = self
            .inner
            .storage
            .save(self.storage_key(), &value.to_string())
        {
            log::warn!("could not persist points balance: {err}");
        }
        let previous = self.inner.cached.replace(value);
        log::debug!("points balance {previous} -> {value}");
        self.notify(&PointsEvent {
            balance: value,
            previous,
            origin,
        });
        value
    }

    fn notify(&self, event: &PointsEvent) {
        // Snapshot first so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }
}

fn pick_in_range<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> u64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Handle returned by [`PointsStore::subscribe`]; unsubscribes on drop.
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now rather than at end of scope.
    pub fn cancel(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::storage::{MemoryPointsStorage, StorageError};

    fn store_with(raw: Option<&str>) -> (PointsStore, MemoryPointsStorage) {
        let storage = raw.map_or_else(MemoryPointsStorage::new, |value| {
            MemoryPointsStorage::with_entry(POINTS_STORAGE_KEY, value)
        });
        (PointsStore::new(storage.clone()), storage)
    }

    #[test]
    fn absent_key_is_seeded_on_first_read() {
        let storage = MemoryPointsStorage::new();
        let config = PointsConfig {
            seed_balance: 40,
            ..PointsConfig::default()
        };
        let store = PointsStore::with_config(storage.clone(), config, 1);
        assert_eq!(store.read(), 40);
        assert_eq!(storage.raw(POINTS_STORAGE_KEY).as_deref(), Some("40"));
    }

    #[test]
    fn stored_zero_is_not_reseeded() {
        let storage = MemoryPointsStorage::with_entry(POINTS_STORAGE_KEY, "0");
        let config = PointsConfig {
            seed_balance: 1_500,
            ..PointsConfig::default()
        };
        let store = PointsStore::with_config(storage, config, 1);
        assert_eq!(store.read(), 0);
    }

    #[test]
    fn malformed_value_reads_as_zero() {
        let (store, _) = store_with(Some("not-a-number"));
        assert_eq!(store.read(), 0);
        assert_eq!(store.add(5), 5);
    }

    #[test]
    fn add_clamps_at_zero() {
        let (store, storage) = store_with(Some("30"));
        assert_eq!(store.add(-100), 0);
        assert_eq!(storage.raw(POINTS_STORAGE_KEY).as_deref(), Some("0"));
        assert_eq!(store.add(25), 25);
        assert_eq!(store.read(), 25);
    }

    #[test]
    fn add_rereads_storage_before_mutating() {
        let (store, storage) = store_with(Some("10"));
        storage.put_raw(POINTS_STORAGE_KEY, "90");
        assert_eq!(store.add(10), 100);
    }

    #[test]
    fn set_floors_and_clamps() {
        let (store, _) = store_with(None);
        assert_eq!(store.set(12.9), 12);
        assert_eq!(store.read(), 12);
        assert_eq!(store.set(-4.0), 0);
        assert_eq!(store.set(f64::NAN), 0);
    }

    #[test]
    fn set_random_normalizes_bounds() {
        let (store, _) = store_with(None);
        for _ in 0..200 {
            let value = store.set_random(90, 10);
            assert!((10..=90).contains(&value));
            assert_eq!(store.read(), value);
        }
        assert_eq!(store.set_random(7, 7), 7);
    }

    #[test]
    fn subscribers_see_every_change_until_dropped() {
        let (store, _) = store_with(Some("10"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |event| sink.borrow_mut().push(*event));

        store.add(5);
        store.apply_external(Some("3"));
        assert_eq!(
            *seen.borrow(),
            vec![
                PointsEvent {
                    balance: 15,
                    previous: 10,
                    origin: ChangeOrigin::Local
                },
                PointsEvent {
                    balance: 3,
                    previous: 15,
                    origin: ChangeOrigin::External
                },
            ]
        );

        assert_eq!(store.listener_count(), 1);
        subscription.cancel();
        assert_eq!(store.listener_count(), 0);
        store.add(1);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn external_removal_reads_as_zero() {
        let (store, _) = store_with(Some("50"));
        assert_eq!(store.apply_external(None), 0);
        assert_eq!(store.balance(), 0);
    }

    #[test]
    fn listener_may_read_store_during_notification() {
        let (store, _) = store_with(Some("1"));
        let observed = Rc::new(Cell::new(0));
        let reader = store.clone();
        let sink = Rc::clone(&observed);
        let _sub = store.subscribe(move |_| sink.set(reader.balance()));
        store.add(41);
        assert_eq!(observed.get(), 42);
    }

    struct BrokenStorage;

    impl PointsStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private mode".into()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota".into()))
        }
    }

    #[test]
    fn unreachable_storage_keeps_working_in_memory() {
        let store = PointsStore::new(BrokenStorage);
        assert_eq!(store.read(), DEFAULT_SEED_BALANCE);
        store.set(20.0);
        assert_eq!(store.add(5), 25);
    }

    #[test]
    fn clones_compare_equal_only_to_same_store() {
        let (a, storage) = store_with(None);
        let b = a.clone();
        let c = PointsStore::new(storage);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
