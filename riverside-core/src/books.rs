//! Digital book catalog.
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::search::{SearchFields, Searchable, filter_items};

const DEFAULT_BOOKS_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/books.json");

/// Whether a copy can be picked up right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    CheckedOut,
}

impl Availability {
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Stable key for translations and CSS modifiers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked_out",
        }
    }
}

/// How a book's price is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTone {
    Regular,
    Sale,
    Featured,
}

impl PriceTone {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Sale => "sale",
            Self::Featured => "featured",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
    /// Shelf price in cents.
    #[serde(default)]
    pub price_cents: u64,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub featured_in_escape_room: bool,
}

impl Book {
    /// Escape-room features outrank sales.
    #[must_use]
    pub const fn price_tone(&self) -> PriceTone {
        if self.featured_in_escape_room {
            PriceTone::Featured
        } else if self.on_sale {
            PriceTone::Sale
        } else {
            PriceTone::Regular
        }
    }

    /// First few tags, as shown on a listing card.
    #[must_use]
    pub fn card_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }
}

impl Searchable for Book {
    fn search_fields(&self) -> SearchFields<'_> {
        let mut fields: SearchFields<'_> =
            smallvec![self.title.as_str(), self.author.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookCatalog {
    pub books: Vec<Book>,
}

impl BookCatalog {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a book catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_BOOKS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Books matching `query` on title, author, description or any tag.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Book> {
        filter_items(&self.books, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalog_has_six_books() {
        let catalog = BookCatalog::load_from_static();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.books[0].title, "The Phoenix Project");
        assert_eq!(
            catalog.find(2).map(|b| b.availability),
            Some(Availability::CheckedOut)
        );
    }

    #[test]
    fn featured_outranks_sale() {
        let catalog = BookCatalog::load_from_static();
        let sapiens = catalog.find(6).expect("sapiens");
        assert!(sapiens.on_sale);
        assert_eq!(sapiens.price_tone(), PriceTone::Featured);
        assert_eq!(catalog.find(1).map(Book::price_tone), Some(PriceTone::Sale));
        assert_eq!(catalog.find(2).map(Book::price_tone), Some(PriceTone::Regular));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"books":[{"id":9,"title":"T","author":"A","description":"D","cover_url":"c"}]}"#;
        let catalog = BookCatalog::from_json(json).unwrap();
        let book = &catalog.books[0];
        assert!(book.tags.is_empty());
        assert_eq!(book.availability, Availability::Available);
        assert!(!book.on_sale);
        assert!(book.card_tags(3).is_empty());
    }
}
