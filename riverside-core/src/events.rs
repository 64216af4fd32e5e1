//! Literary escape-room events.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::constants::SPOTS_LOW_THRESHOLD;
use crate::search::{SearchFields, Searchable, filter_items};

const DEFAULT_EVENTS_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/events.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeRoomEvent {
    pub id: String,
    pub title: String,
    pub book_title: String,
    pub book_author: String,
    pub date: NaiveDate,
    /// Display range such as `18:00 - 20:30`.
    pub time: String,
    pub spots_left: u32,
    pub total_spots: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub image_url: String,
}

impl EscapeRoomEvent {
    #[must_use]
    pub const fn is_almost_full(&self) -> bool {
        self.spots_left <= SPOTS_LOW_THRESHOLD
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.spots_left == 0
    }

    #[must_use]
    pub const fn spots_taken(&self) -> u32 {
        self.total_spots.saturating_sub(self.spots_left)
    }
}

impl Searchable for EscapeRoomEvent {
    fn search_fields(&self) -> SearchFields<'_> {
        smallvec![
            self.title.as_str(),
            self.book_title.as_str(),
            self.book_author.as_str()
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventSchedule {
    pub events: Vec<EscapeRoomEvent>,
}

impl EventSchedule {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an event schedule.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_EVENTS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&EscapeRoomEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events matching `query` on title, book title or book author.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&EscapeRoomEvent> {
        filter_items(&self.events, query)
    }
}
