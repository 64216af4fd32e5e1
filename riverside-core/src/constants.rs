//! Centralized keys and tuning constants for the library services core.
//!
//! Values that shape persisted state or scoring live here so they can only be
//! adjusted through reviewed code changes, not through the JSON assets.

// Persistence -----------------------------------------------------------------
/// Local-storage key holding the points balance as a decimal string.
pub const POINTS_STORAGE_KEY: &str = "library_points";
/// Balance written the first time the key is found absent.
pub const DEFAULT_SEED_BALANCE: u64 = 0;

// Listing ---------------------------------------------------------------------
/// Events with this many spots (or fewer) left are flagged as almost full.
pub const SPOTS_LOW_THRESHOLD: u32 = 3;

// Bookings --------------------------------------------------------------------
/// How long the book reservation success screen stays up before resetting.
pub const RESERVATION_CONFIRM_DELAY_MS: i32 = 2_000;
/// Standard loan period mentioned on reservation confirmations.
pub const LOAN_PERIOD_DAYS: u32 = 14;
/// Prefix for simulated confirmation references.
pub(crate) const CONFIRMATION_PREFIX: &str = "RL";
/// Seed mixed into confirmation reference hashes.
pub(crate) const CONFIRMATION_HASH_SEED: u64 = 0x5249_5645_5253_4944;
