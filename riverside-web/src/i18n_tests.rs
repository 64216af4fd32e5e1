//! Locale bundles stay in step with the English source

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_nested_key(json: &Value, key: &str) -> bool {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = json;

    for part in parts {
        match current.get(part) {
            Some(value) => current = value,
            None => return false,
        }
    }

    current.is_string() || current.is_object()
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn locales_have_matching_keys() {
    let locales = locale_codes();
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locales {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn required_feature_keys_exist() {
    let locales = locale_codes();
    let required_keys = [
        "points.count",
        "rewards.claim",
        "rewards.short",
        "leaderboard.medal.gold",
        "events.spots_left",
        "events.difficulty.advanced",
        "register.issue.group_size",
        "contact.issue.invalid_email",
        "printers.filament_status.empty",
        "printer_booking.issue.date_before_earliest",
        "books.count",
        "books.availability.checked_out",
        "reservation.success",
        "confirm.field.pickup_date",
        "not_found.back",
    ];

    for locale in locales {
        let (_, json) = load_locale(&locale);
        for key in required_keys {
            assert!(
                find_nested_key(&json, key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
        assert!(
            !content.contains("{{{"),
            "Found triple opening brace in {locale}"
        );
        assert!(
            !content.contains("}}}"),
            "Found triple closing brace in {locale}"
        );
    }
}

#[test]
fn domain_keys_resolve_in_english() {
    use riverside_core::{Availability, ContactIssue, Difficulty, FilamentStatus, Medal};

    let (_, en) = load_locale("en");
    let mut keys: Vec<String> = [
        ContactIssue::MissingFirstName,
        ContactIssue::MissingLastName,
        ContactIssue::MissingEmail,
        ContactIssue::InvalidEmail,
        ContactIssue::MissingPhone,
    ]
    .iter()
    .map(|issue| format!("contact.issue.{}", issue.key()))
    .collect();
    keys.extend(
        [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
            .iter()
            .map(|d| format!("events.difficulty.{}", d.key())),
    );
    keys.extend(
        [FilamentStatus::Good, FilamentStatus::Low, FilamentStatus::Empty]
            .iter()
            .map(|s| format!("printers.filament_status.{}", s.key())),
    );
    keys.extend(
        [Availability::Available, Availability::CheckedOut]
            .iter()
            .map(|a| format!("books.availability.{}", a.key())),
    );
    keys.extend(
        [Medal::Gold, Medal::Silver, Medal::Bronze]
            .iter()
            .map(|m| format!("leaderboard.medal.{}", m.key())),
    );

    for key in keys {
        assert!(find_nested_key(&en, &key), "missing {key}");
    }
}

#[test]
fn confirmation_fields_cover_every_summary_line() {
    use riverside_core::{BookingService, SimulatedBookingService};

    let (_, en) = load_locale("en");
    let data = riverside_core::LibraryData::load_from_static();
    let service = SimulatedBookingService::new();
    let contact = riverside_core::ContactDetails {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.org".into(),
        phone: "0470".into(),
    };
    let day = chrono::NaiveDate::from_ymd_opt(2025, 10, 21).unwrap();
    let reservation = riverside_core::ReservationForm {
        pickup_date: Some(day),
        contact: contact.clone(),
    }
    .request(&data.books.books[0], day)
    .unwrap();
    let registration = riverside_core::RegistrationForm {
        adults: 2,
        kids: 0,
        contact,
    }
    .request(&data.events.events[1], &data.pricing.events)
    .unwrap();

    for request in [
        riverside_core::BookingRequest::BookReservation(reservation),
        riverside_core::BookingRequest::EventRegistration(registration),
    ] {
        for line in service.submit(&request).summary {
            let key = format!("confirm.field.{}", line.field);
            assert!(find_nested_key(&en, &key), "missing {key}");
        }
    }
}
