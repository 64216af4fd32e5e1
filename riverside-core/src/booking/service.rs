//! Submission seam: requests go out, confirmations come back.
use std::cell::Cell;
use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use twox_hash::XxHash64;

use super::printer_booking::PrinterBookingRequest;
use super::registration::EventRegistrationRequest;
use super::reservation::BookReservationRequest;
use crate::constants::{CONFIRMATION_HASH_SEED, CONFIRMATION_PREFIX};
use crate::pricing::Awards;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    EventRegistration,
    PrinterBooking,
    BookReservation,
}

impl BookingKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EventRegistration => "event_registration",
            Self::PrinterBooking => "printer_booking",
            Self::BookReservation => "book_reservation",
        }
    }

    /// Bonus points this kind of booking earns.
    #[must_use]
    pub const fn award(self, awards: &Awards) -> u64 {
        match self {
            Self::EventRegistration => awards.event_registration,
            Self::PrinterBooking => awards.printer_booking,
            Self::BookReservation => awards.book_reservation,
        }
    }
}

/// One labelled value echoed back on a confirmation. `field` is a stable
/// key the UI translates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub field: String,
    pub value: String,
}

impl SummaryLine {
    pub fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// A validated booking ready to hand to a [`BookingService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingRequest {
    EventRegistration(EventRegistrationRequest),
    PrinterBooking(PrinterBookingRequest),
    BookReservation(BookReservationRequest),
}

impl BookingRequest {
    #[must_use]
    pub const fn kind(&self) -> BookingKind {
        match self {
            Self::EventRegistration(_) => BookingKind::EventRegistration,
            Self::PrinterBooking(_) => BookingKind::PrinterBooking,
            Self::BookReservation(_) => BookingKind::BookReservation,
        }
    }

    /// The values a human confirmation repeats back, in display order.
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryLine> {
        match self {
            Self::EventRegistration(request) => request.summary(),
            Self::PrinterBooking(request) => request.summary(),
            Self::BookReservation(request) => request.summary(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::EventRegistration(request) => &request.contact.email,
            Self::PrinterBooking(request) => &request.contact.email,
            Self::BookReservation(request) => &request.contact.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub reference: String,
    pub kind: BookingKind,
    pub summary: Vec<SummaryLine>,
}

/// Whatever accepts bookings. The library has no backend; the shipped
/// implementation is [`SimulatedBookingService`] and tests supply fakes.
pub trait BookingService {
    fn submit(&self, request: &BookingRequest) -> Confirmation;
}

/// Accepts everything, logs the request and hands back a reference derived
/// from the request contents.
#[derive(Debug, Default)]
pub struct SimulatedBookingService {
    submitted: Cell<u64>,
}

impl SimulatedBookingService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn submitted(&self) -> u64 {
        self.submitted.get()
    }
}

impl BookingService for SimulatedBookingService {
    fn submit(&self, request: &BookingRequest) -> Confirmation {
        let sequence = self.submitted.get();
        self.submitted.set(sequence + 1);
        let payload = serde_json::to_vec(request).unwrap_or_default();
        let reference = confirmation_reference(&payload, sequence);
        log::info!(
            "simulated {} submission {reference}: {}",
            request.kind().key(),
            String::from_utf8_lossy(&payload)
        );
        Confirmation {
            reference,
            kind: request.kind(),
            summary: request.summary(),
        }
    }
}

/// `RL-` followed by eight hex digits of an xxHash64 over the payload and
/// the submission sequence number.
#[must_use]
pub fn confirmation_reference(payload: &[u8], sequence: u64) -> String {
    let mut hasher = XxHash64::with_seed(CONFIRMATION_HASH_SEED);
    hasher.write(payload);
    hasher.write_u64(sequence);
    let digest = hasher.finish();
    format!("{CONFIRMATION_PREFIX}-{:08X}", digest >> 32)
}
