//! Front desk: submits validated bookings and pays out bonus points.
use serde::{Deserialize, Serialize};

use super::service::{BookingRequest, BookingService, Confirmation};
use crate::points::PointsStore;
use crate::pricing::Awards;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub confirmation: Confirmation,
    pub awarded: u64,
    pub balance: u64,
}

pub struct BookingDesk<S: BookingService> {
    service: S,
    store: PointsStore,
    awards: Awards,
}

impl<S: BookingService> BookingDesk<S> {
    pub const fn new(service: S, store: PointsStore, awards: Awards) -> Self {
        Self {
            service,
            store,
            awards,
        }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub const fn store(&self) -> &PointsStore {
        &self.store
    }

    pub const fn awards(&self) -> &Awards {
        &self.awards
    }

    /// Hand the request to the service, then award the bonus for its kind.
    pub fn submit(&self, request: &BookingRequest) -> BookingReceipt {
        let confirmation = self.service.submit(request);
        let awarded = confirmation.kind.award(&self.awards);
        let balance = if awarded == 0 {
            self.store.read()
        } else {
            self.store.add(i64::try_from(awarded).unwrap_or(i64::MAX))
        };
        log::debug!(
            "booking {} confirmed, +{awarded} points",
            confirmation.reference
        );
        BookingReceipt {
            confirmation,
            awarded,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::contact::ContactDetails;
    use crate::booking::reservation::BookReservationRequest;
    use crate::booking::service::BookingKind;
    use crate::points::MemoryPointsStorage;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingService {
        seen: RefCell<Vec<BookingRequest>>,
    }

    impl BookingService for RecordingService {
        fn submit(&self, request: &BookingRequest) -> Confirmation {
            self.seen.borrow_mut().push(request.clone());
            Confirmation {
                reference: format!("FAKE-{}", self.seen.borrow().len()),
                kind: request.kind(),
                summary: request.summary(),
            }
        }
    }

    fn reservation() -> BookingRequest {
        BookingRequest::BookReservation(BookReservationRequest {
            book_id: 3,
            book_title: "Designing Data-Intensive Applications".into(),
            book_author: "Martin Kleppmann".into(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 10, 22).unwrap(),
            contact: ContactDetails::default(),
        })
    }

    #[test]
    fn submit_forwards_request_and_awards_points() {
        let store = PointsStore::new(MemoryPointsStorage::new());
        let desk = BookingDesk::new(RecordingService::default(), store.clone(), Awards::default());
        let receipt = desk.submit(&reservation());
        assert_eq!(receipt.confirmation.reference, "FAKE-1");
        assert_eq!(receipt.confirmation.kind, BookingKind::BookReservation);
        assert_eq!((receipt.awarded, receipt.balance), (5, 5));
        assert_eq!(store.read(), 5);
        assert_eq!(desk.service().seen.borrow().len(), 1);
    }

    #[test]
    fn zero_award_leaves_balance_alone() {
        let store = PointsStore::new(MemoryPointsStorage::new());
        store.set(40.0);
        let awards = Awards {
            book_reservation: 0,
            ..Awards::default()
        };
        let desk = BookingDesk::new(RecordingService::default(), store, awards);
        assert_eq!(desk.submit(&reservation()).balance, 40);
    }
}
