use anyhow::{Context, Result, anyhow, ensure};
use chrono::Days;
use rand::Rng;
use riverside_core::{
    BookingReceipt, BookingRequest, ContactDetails, ContactIssue, LibraryServices,
    PrinterBookingForm, PrinterBookingIssue, RegistrationForm, RegistrationIssue, ReservationForm,
    ReservationIssue, SimulatedBookingService,
};

use super::ScenarioCtx;

const STEPS: usize = 40;
const SUBMISSIONS: u64 = 12;

type Services = LibraryServices<SimulatedBookingService>;

pub fn event_pricing(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let data = ctx.data;
    let pricing = &data.pricing.events;

    // Anchors from the published price list.
    ensure!(pricing.quote(2, 0).total_cents == 8_000, "2 adults should cost €80.00");
    ensure!(pricing.quote(6, 2).total_cents == 18_400, "6 adults + 2 kids should cost €184.00");
    for (adults, kids) in [(1, 0), (0, 1), (9, 0), (5, 4)] {
        let quote = pricing.quote(adults, kids);
        ensure!(
            !quote.is_priced() && quote.total_cents == 0,
            "{adults}+{kids} should have no price"
        );
    }

    let roomiest = data
        .events
        .events
        .iter()
        .max_by_key(|event| event.spots_left)
        .context("no events scheduled")?;

    for step in 0..STEPS {
        let adults = ctx.rng.gen_range(0..=9_u32);
        let kids = ctx.rng.gen_range(0..=9_u32);
        let people = adults + kids;
        let quote = pricing.quote(adults, kids);
        match pricing.tier_for(people) {
            Some(tier) => {
                let want = u64::from(adults) * tier.adult_cents + u64::from(kids) * tier.kid_cents;
                ensure!(quote.total_cents == want, "step {step}: {adults}+{kids} quoted {}", quote.total_cents);
                ensure!(pricing.group.contains(people), "step {step}: tier covers {people} outside the group bounds");
            }
            None => ensure!(quote.total_cents == 0, "step {step}: unpriced group of {people} has a total"),
        }

        let form = RegistrationForm {
            adults,
            kids,
            contact: ctx.contact(),
        };
        let issues = form.issues(roomiest, pricing);
        if !pricing.group.contains(people) || !quote.is_priced() {
            ensure!(
                matches!(issues.as_slice(), [RegistrationIssue::GroupSize { .. }]),
                "step {step}: group of {people} gave {issues:?}"
            );
        } else if people > roomiest.spots_left {
            ensure!(
                matches!(issues.as_slice(), [RegistrationIssue::NotEnoughSpots { .. }]),
                "step {step}: {people} people for {} spots gave {issues:?}",
                roomiest.spots_left
            );
        } else {
            ensure!(issues.is_empty(), "step {step}: valid group of {people} gave {issues:?}");
        }
    }
    Ok(())
}

pub fn booking_flow(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let (store, _storage) = ctx.store_with(0);
    let services = ctx.services(store.clone());
    let awards = ctx.data.pricing.awards;
    let mut expected = 0;

    for step in 0..SUBMISSIONS {
        let receipt = match ctx.rng.gen_range(0..3) {
            0 => register(ctx, &services),
            1 => book_printer(ctx, &services),
            _ => reserve_book(ctx, &services),
        }
        .with_context(|| format!("step {step}"))?;

        expected += receipt.awarded;
        let kind = receipt.confirmation.kind;
        ensure!(
            receipt.awarded == kind.award(&awards),
            "step {step}: {} awarded {}",
            kind.key(),
            receipt.awarded
        );
        ensure!(
            receipt.balance == expected && store.read() == expected,
            "step {step}: balance {} after awards totalling {expected}",
            receipt.balance
        );
        let reference = &receipt.confirmation.reference;
        ensure!(
            reference.starts_with("RL-") && reference.len() == 11,
            "step {step}: malformed reference {reference}"
        );
        ensure!(!receipt.confirmation.summary.is_empty(), "step {step}: empty summary");
    }
    ensure!(
        services.desk().service().submitted() == SUBMISSIONS,
        "service saw {} submissions",
        services.desk().service().submitted()
    );
    Ok(())
}

fn register(ctx: &mut ScenarioCtx<'_>, services: &Services) -> Result<BookingReceipt> {
    let data = ctx.data;
    let pricing = &data.pricing.events;
    let open: Vec<_> = data
        .events
        .events
        .iter()
        .filter(|event| event.spots_left >= pricing.group.min)
        .collect();
    let event = *ctx.pick(&open).context("no event with room for a group")?;

    let blank = RegistrationForm::default().issues(event, pricing);
    ensure!(
        blank.contains(&RegistrationIssue::Contact(ContactIssue::MissingFirstName)),
        "blank registration for {} gave {blank:?}",
        event.id
    );

    let people = ctx
        .rng
        .gen_range(pricing.group.min..=pricing.group.max.min(event.spots_left));
    let adults = ctx.rng.gen_range(1..=people);
    let form = RegistrationForm {
        adults,
        kids: people - adults,
        contact: ctx.contact(),
    };
    let request = form
        .request(event, pricing)
        .map_err(|issues| anyhow!("registration for {} refused: {issues:?}", event.id))?;
    ensure!(
        request.total_cents == form.quote(pricing).total_cents,
        "request total differs from the quote"
    );
    Ok(services.submit(&BookingRequest::EventRegistration(request)))
}

fn book_printer(ctx: &mut ScenarioCtx<'_>, services: &Services) -> Result<BookingReceipt> {
    let data = ctx.data;
    let pricing = &data.pricing.printers;
    let today = ctx.today;

    if let Some(offline) = data.printers.printers.iter().find(|p| !p.available) {
        let issues = PrinterBookingForm::default().issues(offline, pricing, today);
        ensure!(
            issues.first() == Some(&PrinterBookingIssue::PrinterUnavailable),
            "{} is offline but gave {issues:?}",
            offline.id
        );
    }

    let bookable: Vec<_> = data
        .printers
        .printers
        .iter()
        .filter(|p| p.available && !p.bookable_materials().is_empty())
        .collect();
    let printer = *ctx.pick(&bookable).context("no bookable printer")?;
    let materials = printer.bookable_materials();
    let first = pricing.first_bookable(today);

    let mut form = PrinterBookingForm {
        date: Some(today),
        time_slot: ctx.pick(&pricing.time_slots).context("no time slots")?.clone(),
        duration_id: ctx.pick(&pricing.durations).context("no durations")?.id.clone(),
        material: (*ctx.pick(&materials).context("no materials")?).to_string(),
        project_description: "Replacement bracket for a bike light".to_string(),
        contact: ctx.contact(),
    };
    if first > today {
        let issues = form.issues(printer, pricing, today);
        ensure!(
            issues == [PrinterBookingIssue::DateBeforeEarliest { earliest: first }],
            "booking before opening gave {issues:?}"
        );
    }
    form.date = first.checked_add_days(Days::new(ctx.rng.gen_range(0..30)));

    let request = form
        .request(printer, pricing, today)
        .map_err(|issues| anyhow!("booking for {} refused: {issues:?}", printer.id))?;
    ensure!(
        Some(request.price_cents) == form.price_cents(pricing),
        "request price differs from the duration tier"
    );
    Ok(services.submit(&BookingRequest::PrinterBooking(request)))
}

fn reserve_book(ctx: &mut ScenarioCtx<'_>, services: &Services) -> Result<BookingReceipt> {
    let data = ctx.data;
    let today = ctx.today;
    let book = ctx.pick(&data.books.books).context("no books")?;

    let past = ReservationForm {
        pickup_date: today.checked_sub_days(Days::new(1)),
        contact: ContactDetails::default(),
    };
    let issues = past.issues(today);
    ensure!(
        issues.first() == Some(&ReservationIssue::PickupInPast)
            && issues.contains(&ReservationIssue::Contact(ContactIssue::MissingEmail)),
        "past pickup with no contact gave {issues:?}"
    );

    let form = ReservationForm {
        pickup_date: today.checked_add_days(Days::new(ctx.rng.gen_range(0..14))),
        contact: ctx.contact(),
    };
    let request = form
        .request(book, today)
        .map_err(|issues| anyhow!("reservation for book {} refused: {issues:?}", book.id))?;
    Ok(services.submit(&BookingRequest::BookReservation(request)))
}
