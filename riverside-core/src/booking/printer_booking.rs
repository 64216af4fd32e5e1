//! Printer session booking.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contact::{ContactDetails, ContactIssue};
use super::service::SummaryLine;
use crate::numbers::format_euros;
use crate::pricing::PrinterPricing;
use crate::printers::Printer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum PrinterBookingIssue {
    #[error("this printer is not available")]
    PrinterUnavailable,
    #[error("pick a date")]
    MissingDate,
    #[error("the date is in the past")]
    DateInPast,
    #[error("bookings open on {earliest}")]
    DateBeforeEarliest { earliest: NaiveDate },
    #[error("pick a time slot")]
    MissingTimeSlot,
    #[error("unknown time slot")]
    UnknownTimeSlot,
    #[error("pick a duration")]
    MissingDuration,
    #[error("unknown duration")]
    UnknownDuration,
    #[error("pick a material")]
    MissingMaterial,
    #[error("material is out of stock or unsupported")]
    MaterialUnavailable,
    #[error("describe your project")]
    MissingDescription,
    #[error(transparent)]
    Contact(#[from] ContactIssue),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrinterBookingForm {
    pub date: Option<NaiveDate>,
    pub time_slot: String,
    pub duration_id: String,
    pub material: String,
    pub project_description: String,
    pub contact: ContactDetails,
}

impl PrinterBookingForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn price_cents(&self, pricing: &PrinterPricing) -> Option<u64> {
        pricing.duration(&self.duration_id).map(|tier| tier.price_cents)
    }

    /// Every problem with the form, given the calendar day `today`.
    #[must_use]
    pub fn issues(
        &self,
        printer: &Printer,
        pricing: &PrinterPricing,
        today: NaiveDate,
    ) -> Vec<PrinterBookingIssue> {
        let mut issues = Vec::new();
        if !printer.available {
            issues.push(PrinterBookingIssue::PrinterUnavailable);
        }
        match self.date {
            None => issues.push(PrinterBookingIssue::MissingDate),
            Some(date) if date < today => issues.push(PrinterBookingIssue::DateInPast),
            Some(date) if date < pricing.earliest_booking_date => {
                issues.push(PrinterBookingIssue::DateBeforeEarliest {
                    earliest: pricing.earliest_booking_date,
                });
            }
            Some(_) => {}
        }
        if self.time_slot.trim().is_empty() {
            issues.push(PrinterBookingIssue::MissingTimeSlot);
        } else if !pricing.has_time_slot(&self.time_slot) {
            issues.push(PrinterBookingIssue::UnknownTimeSlot);
        }
        if self.duration_id.trim().is_empty() {
            issues.push(PrinterBookingIssue::MissingDuration);
        } else if pricing.duration(&self.duration_id).is_none() {
            issues.push(PrinterBookingIssue::UnknownDuration);
        }
        if self.material.trim().is_empty() {
            issues.push(PrinterBookingIssue::MissingMaterial);
        } else if !printer.accepts_material(&self.material) {
            issues.push(PrinterBookingIssue::MaterialUnavailable);
        }
        if self.project_description.trim().is_empty() {
            issues.push(PrinterBookingIssue::MissingDescription);
        }
        issues.extend(self.contact.issues().into_iter().map(PrinterBookingIssue::from));
        issues
    }

    #[must_use]
    pub fn can_submit(&self, printer: &Printer, pricing: &PrinterPricing, today: NaiveDate) -> bool {
        self.issues(printer, pricing, today).is_empty()
    }

    /// Freeze the form into a request.
    ///
    /// # Errors
    ///
    /// Returns every outstanding issue if the form cannot be submitted.
    pub fn request(
        &self,
        printer: &Printer,
        pricing: &PrinterPricing,
        today: NaiveDate,
    ) -> Result<PrinterBookingRequest, Vec<PrinterBookingIssue>> {
        let issues = self.issues(printer, pricing, today);
        let (Some(date), Some(tier), true) =
            (self.date, pricing.duration(&self.duration_id), issues.is_empty())
        else {
            return Err(issues);
        };
        Ok(PrinterBookingRequest {
            printer_id: printer.id.clone(),
            printer_name: printer.name.clone(),
            date,
            time_slot: self.time_slot.clone(),
            duration_id: tier.id.clone(),
            duration_label: tier.label.clone(),
            material: self.material.clone(),
            project_description: self.project_description.trim().to_string(),
            price_cents: tier.price_cents,
            contact: self.contact.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterBookingRequest {
    pub printer_id: String,
    pub printer_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub duration_id: String,
    pub duration_label: String,
    pub material: String,
    pub project_description: String,
    pub price_cents: u64,
    pub contact: ContactDetails,
}

impl PrinterBookingRequest {
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryLine> {
        vec![
            SummaryLine::new("printer", self.printer_name.clone()),
            SummaryLine::new("date", self.date.to_string()),
            SummaryLine::new("time", self.time_slot.clone()),
            SummaryLine::new("duration", self.duration_label.clone()),
            SummaryLine::new("material", self.material.clone()),
            SummaryLine::new("total", format_euros(self.price_cents)),
            SummaryLine::new("name", self.contact.full_name()),
            SummaryLine::new("email", self.contact.email.trim()),
        ]
    }
}
