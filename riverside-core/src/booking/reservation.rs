//! Book reservation for pickup at the desk.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contact::{ContactDetails, ContactIssue};
use super::service::SummaryLine;
use crate::books::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ReservationIssue {
    #[error("pick a pickup date")]
    MissingPickupDate,
    #[error("the pickup date is in the past")]
    PickupInPast,
    #[error(transparent)]
    Contact(#[from] ContactIssue),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReservationForm {
    pub pickup_date: Option<NaiveDate>,
    pub contact: ContactDetails,
}

impl ReservationForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn issues(&self, today: NaiveDate) -> Vec<ReservationIssue> {
        let mut issues = Vec::new();
        match self.pickup_date {
            None => issues.push(ReservationIssue::MissingPickupDate),
            Some(date) if date < today => issues.push(ReservationIssue::PickupInPast),
            Some(_) => {}
        }
        issues.extend(self.contact.issues().into_iter().map(ReservationIssue::from));
        issues
    }

    #[must_use]
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.issues(today).is_empty()
    }

    /// Freeze the form into a request for `book`. Checked-out books can be
    /// reserved too; the reservation queues for the next return.
    ///
    /// # Errors
    ///
    /// Returns every outstanding issue if the form cannot be submitted.
    pub fn request(
        &self,
        book: &Book,
        today: NaiveDate,
    ) -> Result<BookReservationRequest, Vec<ReservationIssue>> {
        let issues = self.issues(today);
        match self.pickup_date {
            Some(pickup_date) if issues.is_empty() => Ok(BookReservationRequest {
                book_id: book.id,
                book_title: book.title.clone(),
                book_author: book.author.clone(),
                pickup_date,
                contact: self.contact.clone(),
            }),
            _ => Err(issues),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReservationRequest {
    pub book_id: u32,
    pub book_title: String,
    pub book_author: String,
    pub pickup_date: NaiveDate,
    pub contact: ContactDetails,
}

impl BookReservationRequest {
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryLine> {
        vec![
            SummaryLine::new("book", self.book_title.clone()),
            SummaryLine::new("author", self.book_author.clone()),
            SummaryLine::new("pickup_date", self.pickup_date.to_string()),
            SummaryLine::new("name", self.contact.full_name()),
            SummaryLine::new("email", self.contact.email.trim()),
        ]
    }
}
