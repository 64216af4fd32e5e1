//! Translated text for validation issues.
use crate::i18n::{fmt_date, t, tr};
use riverside_core::{ContactIssue, PrinterBookingIssue, RegistrationIssue, ReservationIssue};
use std::collections::BTreeMap;

#[must_use]
pub fn contact_issue_text(issue: ContactIssue) -> String {
    t(&format!("contact.issue.{}", issue.key()))
}

#[must_use]
pub fn registration_issue_text(issue: &RegistrationIssue) -> String {
    match *issue {
        RegistrationIssue::EventFull => t("register.issue.event_full"),
        RegistrationIssue::GroupSize { min, max, .. } => {
            let (min, max) = (min.to_string(), max.to_string());
            let args = BTreeMap::from([("min", min.as_str()), ("max", max.as_str())]);
            tr("register.issue.group_size", Some(&args))
        }
        RegistrationIssue::NotEnoughSpots { requested, left } => {
            let (requested, left) = (requested.to_string(), left.to_string());
            let args = BTreeMap::from([
                ("requested", requested.as_str()),
                ("left", left.as_str()),
            ]);
            tr("register.issue.not_enough_spots", Some(&args))
        }
        RegistrationIssue::Contact(issue) => contact_issue_text(issue),
    }
}

#[must_use]
pub fn printer_issue_text(issue: &PrinterBookingIssue) -> String {
    let key = match *issue {
        PrinterBookingIssue::Contact(issue) => return contact_issue_text(issue),
        PrinterBookingIssue::DateBeforeEarliest { earliest } => {
            let date = fmt_date(earliest);
            let args = BTreeMap::from([("date", date.as_str())]);
            return tr("printer_booking.issue.date_before_earliest", Some(&args));
        }
        PrinterBookingIssue::PrinterUnavailable => "printer_unavailable",
        PrinterBookingIssue::MissingDate => "missing_date",
        PrinterBookingIssue::DateInPast => "date_in_past",
        PrinterBookingIssue::MissingTimeSlot => "missing_time_slot",
        PrinterBookingIssue::UnknownTimeSlot => "unknown_time_slot",
        PrinterBookingIssue::MissingDuration => "missing_duration",
        PrinterBookingIssue::UnknownDuration => "unknown_duration",
        PrinterBookingIssue::MissingMaterial => "missing_material",
        PrinterBookingIssue::MaterialUnavailable => "material_unavailable",
        PrinterBookingIssue::MissingDescription => "missing_description",
    };
    t(&format!("printer_booking.issue.{key}"))
}

#[must_use]
pub fn reservation_issue_text(issue: &ReservationIssue) -> String {
    match *issue {
        ReservationIssue::MissingPickupDate => t("reservation.issue.missing_pickup_date"),
        ReservationIssue::PickupInPast => t("reservation.issue.pickup_in_past"),
        ReservationIssue::Contact(issue) => contact_issue_text(issue),
    }
}

/// Issues that are not about an individual contact field. Contact problems
/// are shown next to their inputs instead.
#[must_use]
pub fn form_level<I, F>(issues: &[I], contact: F, text: impl Fn(&I) -> String) -> Vec<String>
where
    F: Fn(&I) -> bool,
{
    issues
        .iter()
        .filter(|issue| !contact(*issue))
        .map(text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parameterised_issues_interpolate() {
        crate::i18n::set_lang("en");
        let text = registration_issue_text(&RegistrationIssue::GroupSize {
            people: 9,
            min: 2,
            max: 8,
        });
        assert_eq!(text, "Groups must have between 2 and 8 people.");
        let text = printer_issue_text(&PrinterBookingIssue::DateBeforeEarliest {
            earliest: NaiveDate::from_ymd_opt(2025, 10, 21).unwrap(),
        });
        assert_eq!(text, "Bookings open on 2025-10-21.");
    }

    #[test]
    fn contact_issues_share_wording_across_forms() {
        crate::i18n::set_lang("en");
        let direct = contact_issue_text(ContactIssue::InvalidEmail);
        assert_eq!(
            reservation_issue_text(&ReservationIssue::Contact(ContactIssue::InvalidEmail)),
            direct
        );
        assert_eq!(direct, "Enter a valid email address.");
    }

    #[test]
    fn form_level_skips_contact_issues() {
        crate::i18n::set_lang("en");
        let issues = [
            ReservationIssue::MissingPickupDate,
            ReservationIssue::Contact(ContactIssue::MissingPhone),
        ];
        let shown = form_level(
            &issues,
            |i| matches!(i, ReservationIssue::Contact(_)),
            reservation_issue_text,
        );
        assert_eq!(shown, vec!["Pick a pickup date.".to_string()]);
    }
}
