//! Event ticket tiers, printer rates and booking awards.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_PRICING_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/pricing.json");

/// Per-person rates for a range of group sizes, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min_people: u32,
    pub max_people: u32,
    pub adult_cents: u64,
    pub kid_cents: u64,
}

impl PriceTier {
    #[must_use]
    pub const fn covers(&self, people: u32) -> bool {
        people >= self.min_people && people <= self.max_people
    }
}

/// Inclusive bounds on a registration's group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBounds {
    pub min: u32,
    pub max: u32,
}

impl GroupBounds {
    #[must_use]
    pub const fn contains(&self, people: u32) -> bool {
        people >= self.min && people <= self.max
    }
}

impl Default for GroupBounds {
    fn default() -> Self {
        Self { min: 2, max: 8 }
    }
}

/// Price of a group registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub adults: u32,
    pub kids: u32,
    pub tier: Option<PriceTier>,
    pub total_cents: u64,
}

impl Quote {
    #[must_use]
    pub const fn people(&self) -> u32 {
        self.adults.saturating_add(self.kids)
    }

    /// A quote with no matching tier prices at zero and cannot be booked.
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        self.tier.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventPricing {
    #[serde(default)]
    pub group: GroupBounds,
    pub tiers: Vec<PriceTier>,
}

impl EventPricing {
    #[must_use]
    pub fn tier_for(&self, people: u32) -> Option<&PriceTier> {
        self.tiers.iter().find(|tier| tier.covers(people))
    }

    /// `adults × adult rate + kids × kid rate` for the tier matching the
    /// whole group, or zero if no tier matches.
    #[must_use]
    pub fn quote(&self, adults: u32, kids: u32) -> Quote {
        let people = adults.saturating_add(kids);
        let tier = self.tier_for(people).copied();
        let total_cents = tier.map_or(0, |tier| {
            u64::from(adults)
                .saturating_mul(tier.adult_cents)
                .saturating_add(u64::from(kids).saturating_mul(tier.kid_cents))
        });
        Quote {
            adults,
            kids,
            tier,
            total_cents,
        }
    }
}

/// Printer session length with a flat fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationTier {
    pub id: String,
    pub label: String,
    pub price_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterPricing {
    /// Bookings before this date are refused regardless of today's date.
    pub earliest_booking_date: NaiveDate,
    pub time_slots: Vec<String>,
    pub durations: Vec<DurationTier>,
}

impl PrinterPricing {
    #[must_use]
    pub fn duration(&self, id: &str) -> Option<&DurationTier> {
        self.durations.iter().find(|tier| tier.id == id)
    }

    #[must_use]
    pub fn has_time_slot(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|known| known == slot)
    }

    /// First date a booking made on `today` may target.
    #[must_use]
    pub fn first_bookable(&self, today: NaiveDate) -> NaiveDate {
        today.max(self.earliest_booking_date)
    }
}

impl Default for PrinterPricing {
    fn default() -> Self {
        Self {
            earliest_booking_date: NaiveDate::MIN,
            time_slots: Vec::new(),
            durations: Vec::new(),
        }
    }
}

/// Bonus points granted after a successful booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Awards {
    pub event_registration: u64,
    pub printer_booking: u64,
    pub book_reservation: u64,
}

impl Default for Awards {
    fn default() -> Self {
        Self {
            event_registration: 25,
            printer_booking: 10,
            book_reservation: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    pub events: EventPricing,
    #[serde(default)]
    pub printers: PrinterPricing,
    #[serde(default)]
    pub awards: Awards,
}

impl PricingConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a pricing table.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::default_config()
    }

    /// Embedded pricing, with hard defaults if the asset is unreadable.
    #[must_use]
    pub fn default_config() -> Self {
        Self::from_json(DEFAULT_PRICING_DATA).unwrap_or_else(|_| Self {
            events: EventPricing {
                group: GroupBounds::default(),
                tiers: vec![
                    PriceTier {
                        min_people: 2,
                        max_people: 2,
                        adult_cents: 4_000,
                        kid_cents: 3_000,
                    },
                    PriceTier {
                        min_people: 3,
                        max_people: 3,
                        adult_cents: 3_000,
                        kid_cents: 2_600,
                    },
                    PriceTier {
                        min_people: 4,
                        max_people: 4,
                        adult_cents: 2_800,
                        kid_cents: 2_400,
                    },
                    PriceTier {
                        min_people: 5,
                        max_people: 5,
                        adult_cents: 2_600,
                        kid_cents: 2_200,
                    },
                    PriceTier {
                        min_people: 6,
                        max_people: 8,
                        adult_cents: 2_400,
                        kid_cents: 2_000,
                    },
                ],
            },
            printers: PrinterPricing::default(),
            awards: Awards::default(),
        })
    }
}
