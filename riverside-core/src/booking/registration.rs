//! Escape-room group registration.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contact::{ContactDetails, ContactIssue};
use super::service::SummaryLine;
use crate::events::EscapeRoomEvent;
use crate::numbers::format_euros;
use crate::pricing::{EventPricing, Quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RegistrationIssue {
    #[error("this event is fully booked")]
    EventFull,
    #[error("groups must have between {min} and {max} people, not {people}")]
    GroupSize { people: u32, min: u32, max: u32 },
    #[error("only {left} spots left for {requested} people")]
    NotEnoughSpots { requested: u32, left: u32 },
    #[error(transparent)]
    Contact(#[from] ContactIssue),
}

/// Editable registration state. Starts at two adults, no kids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub adults: u32,
    pub kids: u32,
    pub contact: ContactDetails,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            adults: 2,
            kids: 0,
            contact: ContactDetails::default(),
        }
    }
}

impl RegistrationForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn people(&self) -> u32 {
        self.adults.saturating_add(self.kids)
    }

    #[must_use]
    pub fn quote(&self, pricing: &EventPricing) -> Quote {
        pricing.quote(self.adults, self.kids)
    }

    /// Group-size problems first, then contact problems.
    #[must_use]
    pub fn issues(&self, event: &EscapeRoomEvent, pricing: &EventPricing) -> Vec<RegistrationIssue> {
        let mut issues = Vec::new();
        let people = self.people();
        if event.is_full() {
            issues.push(RegistrationIssue::EventFull);
        } else if !pricing.group.contains(people) || !self.quote(pricing).is_priced() {
            issues.push(RegistrationIssue::GroupSize {
                people,
                min: pricing.group.min,
                max: pricing.group.max,
            });
        } else if people > event.spots_left {
            issues.push(RegistrationIssue::NotEnoughSpots {
                requested: people,
                left: event.spots_left,
            });
        }
        issues.extend(self.contact.issues().into_iter().map(RegistrationIssue::from));
        issues
    }

    #[must_use]
    pub fn can_submit(&self, event: &EscapeRoomEvent, pricing: &EventPricing) -> bool {
        self.issues(event, pricing).is_empty()
    }

    /// Freeze the form into a request.
    ///
    /// # Errors
    ///
    /// Returns every outstanding issue if the form cannot be submitted.
    pub fn request(
        &self,
        event: &EscapeRoomEvent,
        pricing: &EventPricing,
    ) -> Result<EventRegistrationRequest, Vec<RegistrationIssue>> {
        let issues = self.issues(event, pricing);
        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(EventRegistrationRequest {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            adults: self.adults,
            kids: self.kids,
            total_cents: self.quote(pricing).total_cents,
            contact: self.contact.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistrationRequest {
    pub event_id: String,
    pub event_title: String,
    pub date: NaiveDate,
    pub time: String,
    pub adults: u32,
    pub kids: u32,
    pub total_cents: u64,
    pub contact: ContactDetails,
}

impl EventRegistrationRequest {
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryLine> {
        vec![
            SummaryLine::new("event", self.event_title.clone()),
            SummaryLine::new("date", self.date.to_string()),
            SummaryLine::new("time", self.time.clone()),
            SummaryLine::new("adults", self.adults.to_string()),
            SummaryLine::new("kids", self.kids.to_string()),
            SummaryLine::new("total", format_euros(self.total_cents)),
            SummaryLine::new("name", self.contact.full_name()),
            SummaryLine::new("email", self.contact.email.trim()),
        ]
    }
}
