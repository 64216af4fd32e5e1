//! Bundle of every static catalog the UI renders.
use serde::de::DeserializeOwned;

use crate::DataLoader;
use crate::books::BookCatalog;
use crate::events::EventSchedule;
use crate::leaderboard::Leaderboard;
use crate::pricing::PricingConfig;
use crate::printers::PrinterFleet;
use crate::rewards::RewardsCatalog;

/// Failure loading a named data asset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("unknown data asset `{0}`")]
    UnknownAsset(String),
    #[error("data asset `{name}` is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Names of the JSON assets under `static/assets/data`.
pub const ASSET_NAMES: [&str; 6] = [
    "books",
    "events",
    "printers",
    "rewards",
    "leaderboard",
    "pricing",
];

/// Loader over the JSON embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataLoader;

impl StaticDataLoader {
    fn raw(name: &str) -> Option<&'static str> {
        Some(match name {
            "books" => include_str!("../../riverside-web/static/assets/data/books.json"),
            "events" => include_str!("../../riverside-web/static/assets/data/events.json"),
            "printers" => include_str!("../../riverside-web/static/assets/data/printers.json"),
            "rewards" => include_str!("../../riverside-web/static/assets/data/rewards.json"),
            "leaderboard" => {
                include_str!("../../riverside-web/static/assets/data/leaderboard.json")
            }
            "pricing" => include_str!("../../riverside-web/static/assets/data/pricing.json"),
            _ => return None,
        })
    }
}

impl DataLoader for StaticDataLoader {
    type Error = DataError;

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let raw = Self::raw(config_name)
            .ok_or_else(|| DataError::UnknownAsset(config_name.to_string()))?;
        serde_json::from_str(raw).map_err(|source| DataError::Malformed {
            name: config_name.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryData {
    pub books: BookCatalog,
    pub events: EventSchedule,
    pub printers: PrinterFleet,
    pub rewards: RewardsCatalog,
    pub leaderboard: Leaderboard,
    pub pricing: PricingConfig,
}

impl LibraryData {
    /// Load every asset through `loader`.
    ///
    /// # Errors
    ///
    /// Returns the first asset that fails to load.
    pub fn load<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        Ok(Self {
            books: loader.load_config("books")?,
            events: loader.load_config("events")?,
            printers: loader.load_config("printers")?,
            rewards: loader.load_config("rewards")?,
            leaderboard: loader.load_config("leaderboard")?,
            pricing: loader.load_config("pricing")?,
        })
    }

    /// Embedded data; each catalog falls back to its own default on error.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::load(&StaticDataLoader).unwrap_or_else(|err| {
            log::error!("falling back to per-catalog defaults: {err}");
            Self {
                books: BookCatalog::load_from_static(),
                events: EventSchedule::load_from_static(),
                printers: PrinterFleet::load_from_static(),
                rewards: RewardsCatalog::load_from_static(),
                leaderboard: Leaderboard::load_from_static(),
                pricing: PricingConfig::default_config(),
            }
        })
    }
}
