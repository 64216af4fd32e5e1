//! Free-text filtering shared by every listing.
use smallvec::SmallVec;

/// Text fields an item exposes to the listing search. Most items expose a
/// handful, so they stay on the stack.
pub type SearchFields<'a> = SmallVec<[&'a str; 8]>;

/// Items that can be matched by a free-text query.
pub trait Searchable {
    fn search_fields(&self) -> SearchFields<'_>;
}

/// A normalized query: trimmed and lowercased once, matched many times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring match against any of the item's fields.
    /// An empty query matches everything.
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Filter `items` by `query`, preserving their original order.
#[must_use]
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = SearchQuery::new(query);
    items.iter().filter(|item| query.matches(*item)).collect()
}
