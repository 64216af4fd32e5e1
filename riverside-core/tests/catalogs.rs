use riverside_core::{
    Availability, BookCatalog, EventSchedule, LibraryData, PrinterKind, PricingConfig,
};

#[test]
fn empty_book_query_returns_all_six_in_order() {
    let catalog = BookCatalog::load_from_static();
    let ids: Vec<_> = catalog.search("").into_iter().map(|b| b.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn tag_only_query_returns_exactly_the_tagged_books() {
    let catalog = BookCatalog::load_from_static();
    for tag in ["Databases", "Career", "Anthropology"] {
        let expected: Vec<_> = catalog
            .books
            .iter()
            .filter(|b| b.tags.iter().any(|t| t == tag))
            .map(|b| b.id)
            .collect();
        let found: Vec<_> = catalog.search(tag).into_iter().map(|b| b.id).collect();
        assert_eq!(found, expected, "{tag}");
        assert_eq!(found.len(), 1);
    }
}

#[test]
fn shared_tag_matches_every_carrier() {
    let catalog = BookCatalog::load_from_static();
    let ids: Vec<_> = catalog.search("programming").into_iter().map(|b| b.id).collect();
    assert_eq!(ids, [2, 4]);
}

#[test]
fn author_match_is_case_insensitive() {
    let catalog = BookCatalog::load_from_static();
    let hits = catalog.search("KLEPPMANN");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].availability, Availability::Available);
}

#[test]
fn event_search_matches_book_title() {
    let schedule = EventSchedule::load_from_static();
    let hits = schedule.search("night circus");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "enchanted-library-heist");
    assert_eq!(schedule.search(" ").len(), 4);
}

#[test]
fn pricing_examples() {
    let pricing = PricingConfig::load_from_static().events;
    assert_eq!(pricing.quote(2, 0).total_cents, 8_000);
    assert_eq!(pricing.quote(6, 2).total_cents, 6 * 2_400 + 2 * 2_000);
    assert_eq!(pricing.quote(1, 0).total_cents, 0);
    assert_eq!(pricing.quote(9, 0).total_cents, 0);
}

#[test]
fn bundle_is_internally_consistent() {
    let data = LibraryData::load_from_static();
    for event in &data.events.events {
        assert!(event.spots_left <= event.total_spots, "{}", event.id);
    }
    for printer in data.printers.of_kind(PrinterKind::ThreeD) {
        assert!(!printer.filaments.is_empty(), "{}", printer.id);
    }
    for reward in &data.rewards.rewards {
        assert!(reward.cost > 0);
    }
    let tiers = &data.pricing.events.tiers;
    for people in data.pricing.events.group.min..=data.pricing.events.group.max {
        assert_eq!(tiers.iter().filter(|t| t.covers(people)).count(), 1, "{people}");
    }
}
