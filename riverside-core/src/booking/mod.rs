//! Booking forms, validation and the submission seam.
pub mod contact;
pub mod desk;
pub mod printer_booking;
pub mod registration;
pub mod reservation;
pub mod service;

pub use contact::{ContactDetails, ContactIssue};
pub use desk::{BookingDesk, BookingReceipt};
pub use printer_booking::{PrinterBookingForm, PrinterBookingIssue, PrinterBookingRequest};
pub use registration::{EventRegistrationRequest, RegistrationForm, RegistrationIssue};
pub use reservation::{BookReservationRequest, ReservationForm, ReservationIssue};
pub use service::{
    BookingKind, BookingRequest, BookingService, Confirmation, SimulatedBookingService,
    SummaryLine, confirmation_reference,
};
