//! Riverside Library Services
//!
//! Platform-agnostic core for the library services demo: the points ledger,
//! rewards, static catalogs, search, pricing and booking validation.
//! This crate has no UI or browser dependencies.

pub mod booking;
pub mod books;
pub mod constants;
pub mod data;
pub mod events;
pub mod leaderboard;
pub mod numbers;
pub mod points;
pub mod pricing;
pub mod printers;
pub mod rewards;
pub mod search;

// Re-export commonly used types
pub use booking::{
    BookReservationRequest, BookingDesk, BookingKind, BookingReceipt, BookingRequest,
    BookingService, Confirmation, ContactDetails, ContactIssue, EventRegistrationRequest,
    PrinterBookingForm, PrinterBookingIssue, PrinterBookingRequest, RegistrationForm,
    RegistrationIssue, ReservationForm, ReservationIssue, SimulatedBookingService, SummaryLine,
};
pub use books::{Availability, Book, BookCatalog, PriceTone};
pub use data::{DataError, LibraryData, StaticDataLoader};
pub use events::{Difficulty, EscapeRoomEvent, EventSchedule};
pub use leaderboard::{Leaderboard, LeaderboardEntry, Medal, RankedEntry};
pub use numbers::format_euros;
pub use points::{
    ChangeOrigin, MemoryPointsStorage, PointsConfig, PointsEvent, PointsStorage, PointsStore,
    StorageError, Subscription,
};
pub use pricing::{Awards, DurationTier, EventPricing, GroupBounds, PriceTier, PricingConfig, Quote};
pub use printers::{Filament, FilamentStatus, Printer, PrinterFleet, PrinterKind};
pub use rewards::{Affordability, ClaimError, ClaimReceipt, Reward, RewardsCatalog};
pub use search::{SearchQuery, Searchable, filter_items};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a named data asset and deserialize it
    ///
    /// # Errors
    ///
    /// Returns an error if the asset cannot be found or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Catalog data plus the points ledger and booking desk wired together
pub struct LibraryServices<S>
where
    S: BookingService,
{
    data: LibraryData,
    desk: BookingDesk<S>,
}

impl<S> LibraryServices<S>
where
    S: BookingService,
{
    /// Load all catalogs and attach the given booking service and points store
    ///
    /// # Errors
    ///
    /// Returns an error if any catalog cannot be loaded.
    pub fn new<L: DataLoader>(loader: &L, service: S, store: PointsStore) -> Result<Self, L::Error> {
        let data = LibraryData::load(loader)?;
        Ok(Self::from_data(data, service, store))
    }

    /// Wire up already-loaded catalogs
    pub fn from_data(data: LibraryData, service: S, store: PointsStore) -> Self {
        let awards = data.pricing.awards;
        Self {
            data,
            desk: BookingDesk::new(service, store, awards),
        }
    }

    pub const fn data(&self) -> &LibraryData {
        &self.data
    }

    pub const fn store(&self) -> &PointsStore {
        self.desk.store()
    }

    pub const fn desk(&self) -> &BookingDesk<S> {
        &self.desk
    }

    /// Redeem a reward against the shared balance
    ///
    /// # Errors
    ///
    /// Returns an error if the reward is unknown or not affordable.
    pub fn claim(&self, reward_id: &str) -> Result<ClaimReceipt, ClaimError> {
        self.data.rewards.claim(self.store(), reward_id)
    }

    /// Submit a validated booking and collect its bonus points
    pub fn submit(&self, request: &BookingRequest) -> BookingReceipt {
        self.desk.submit(request)
    }
}
