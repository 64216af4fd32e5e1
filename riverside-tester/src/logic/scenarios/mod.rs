//! Scripted scenarios run against `riverside-core` with seeded inputs.
use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use riverside_core::constants::POINTS_STORAGE_KEY;
use riverside_core::{
    ContactDetails, LibraryData, LibraryServices, MemoryPointsStorage, PointsStore,
    SimulatedBookingService,
};

mod bookings;
mod ledger;
mod listings;

/// Calendar day every scenario treats as "today". One day before the printer
/// room opens for bookings, so the earliest-date rule is exercised.
pub const SCENARIO_TODAY: (i32, u32, u32) = (2025, 10, 20);

/// State handed to a scenario for one iteration.
pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub rng: ChaCha8Rng,
    pub data: &'a LibraryData,
    pub today: NaiveDate,
}

impl ScenarioCtx<'_> {
    /// Fresh in-memory store holding `balance`, plus a handle on its storage
    /// so a scenario can play the part of another tab.
    pub fn store_with(&self, balance: u64) -> (PointsStore, MemoryPointsStorage) {
        let storage = MemoryPointsStorage::with_entry(POINTS_STORAGE_KEY, &balance.to_string());
        (PointsStore::new(storage.clone()), storage)
    }

    pub fn services(&self, store: PointsStore) -> LibraryServices<SimulatedBookingService> {
        LibraryServices::from_data(self.data.clone(), SimulatedBookingService::new(), store)
    }

    /// Plausible, complete contact details.
    pub fn contact(&mut self) -> ContactDetails {
        const FIRST: [&str; 5] = ["Ines", "Bram", "Lotte", "Youssef", "Marie"];
        const LAST: [&str; 5] = ["Maes", "Peeters", "Janssens", "El Amrani", "Claes"];
        let first = FIRST[self.rng.gen_range(0..FIRST.len())];
        let last = LAST[self.rng.gen_range(0..LAST.len())];
        ContactDetails {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.org", first.to_lowercase(), self.rng.gen_range(1..1000)),
            phone: format!("04{:08}", self.rng.gen_range(0..100_000_000_u32)),
        }
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'s, T>(&mut self, items: &'s [T]) -> Option<&'s T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rng.gen_range(0..items.len())])
        }
    }
}

/// A named check run once per iteration with its own seeded generator.
#[derive(Clone, Copy)]
pub struct LogicScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&mut ScenarioCtx<'_>) -> Result<()>,
}

impl std::fmt::Debug for LogicScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicScenario").field("name", &self.name).finish()
    }
}

const SCENARIOS: [LogicScenario; 6] = [
    LogicScenario {
        name: "points-ledger",
        description: "Random add/set/set_random sequences keep the balance clamped and persisted",
        run: ledger::points_ledger,
    },
    LogicScenario {
        name: "cross-tab-sync",
        description: "Values written by another tab reach subscribers and coerce like stored values",
        run: ledger::cross_tab_sync,
    },
    LogicScenario {
        name: "reward-claims",
        description: "Claims deduct exactly the cost or refuse without touching the balance",
        run: ledger::reward_claims,
    },
    LogicScenario {
        name: "event-pricing",
        description: "Group quotes follow the tier table and out-of-range groups are blocked",
        run: bookings::event_pricing,
    },
    LogicScenario {
        name: "booking-flow",
        description: "Valid registrations, printer bookings and reservations award their bonus",
        run: bookings::booking_flow,
    },
    LogicScenario {
        name: "catalog-search",
        description: "Listing searches are trimmed, case-insensitive and order-preserving",
        run: listings::catalog_search,
    },
];

#[must_use]
pub fn find_scenario(name: &str) -> Option<LogicScenario> {
    SCENARIOS.iter().copied().find(|s| s.name == name)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn scenario_names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|s| s.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ctx(data: &LibraryData, seed: u64) -> ScenarioCtx<'_> {
        let (y, m, d) = SCENARIO_TODAY;
        ScenarioCtx {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            data,
            today: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    #[test]
    fn names_are_unique_and_listed() {
        let mut names = scenario_names();
        assert_eq!(names.len(), list_scenarios().len());
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SCENARIOS.len());
    }

    #[test]
    fn unknown_scenario_is_none() {
        assert!(find_scenario("points-ledger").is_some());
        assert!(find_scenario("smoke").is_none());
    }

    #[test]
    fn every_scenario_passes_on_the_shipped_data() {
        let data = LibraryData::load_from_static();
        for scenario in SCENARIOS {
            for seed in [1, 42, 1337] {
                let mut ctx = ctx(&data, seed);
                (scenario.run)(&mut ctx)
                    .unwrap_or_else(|err| panic!("{} seed {seed}: {err:#}", scenario.name));
            }
        }
    }

    #[test]
    fn contact_details_are_complete() {
        let data = LibraryData::default();
        let mut ctx = ctx(&data, 7);
        for _ in 0..20 {
            assert!(ctx.contact().is_complete());
        }
    }
}
