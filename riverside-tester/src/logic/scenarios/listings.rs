use anyhow::{Context, Result, ensure};
use rand::Rng;
use riverside_core::PrinterKind;

use super::ScenarioCtx;

const STEPS: usize = 20;

/// True when `found` appears in `all` in the same relative order.
fn is_ordered_subset<T: PartialEq>(found: &[&T], all: &[T]) -> bool {
    let mut rest = all.iter();
    found.iter().all(|item| rest.any(|candidate| candidate == *item))
}

/// Shuffle the case of a query and pad it with whitespace.
fn scramble(ctx: &mut ScenarioCtx<'_>, query: &str) -> String {
    let body: String = query
        .chars()
        .map(|c| {
            if ctx.rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();
    let lead = " ".repeat(ctx.rng.gen_range(0..3));
    let trail = " ".repeat(ctx.rng.gen_range(0..3));
    format!("{lead}{body}{trail}")
}

pub fn catalog_search(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let data = ctx.data;
    let books = &data.books.books;

    let everything = data.books.search("   ");
    ensure!(
        everything.len() == books.len() && is_ordered_subset(&everything, books),
        "blank query should list every book in catalog order"
    );

    for step in 0..STEPS {
        let book = ctx.pick(books).context("no books")?;

        let tag = ctx.pick(&book.tags).cloned().unwrap_or_default();
        if !tag.is_empty() {
            let hits = data.books.search(&tag);
            ensure!(
                hits.iter().any(|hit| hit.id == book.id),
                "step {step}: tag {tag:?} lost book {}",
                book.id
            );
            ensure!(is_ordered_subset(&hits, books), "step {step}: tag search reordered books");
        }

        let query = scramble(ctx, &book.title);
        let hits = data.books.search(&query);
        ensure!(
            hits.iter().any(|hit| hit.id == book.id),
            "step {step}: {query:?} did not find {}",
            book.title
        );
        ensure!(
            hits == data.books.search(&book.title.to_lowercase()),
            "step {step}: case or padding changed the results for {query:?}"
        );

        let author = book.author.split_whitespace().last().unwrap_or_default();
        ensure!(
            data.books.search(author).iter().any(|hit| hit.id == book.id),
            "step {step}: author {author:?} did not find {}",
            book.title
        );
    }

    for step in 0..STEPS {
        let event = ctx.pick(&data.events.events).context("no events")?;
        let query = scramble(ctx, &event.book_author);
        let hits = data.events.search(&query);
        ensure!(
            hits.iter().any(|hit| hit.id == event.id),
            "step {step}: {query:?} did not find event {}",
            event.id
        );
        ensure!(is_ordered_subset(&hits, &data.events.events), "step {step}: event search reordered");
    }

    let three_d = data.printers.of_kind(PrinterKind::ThreeD);
    let documents = data.printers.of_kind(PrinterKind::Document);
    ensure!(
        three_d.len() + documents.len() == data.printers.printers.len(),
        "printer kinds do not partition the fleet"
    );
    for kind in [PrinterKind::ThreeD, PrinterKind::Document] {
        let listed = data.printers.search(kind, "");
        ensure!(listed == data.printers.of_kind(kind), "{kind:?} listing differs from the fleet half");
        for printer in &listed {
            let hits = data.printers.search(kind, &printer.model.to_ascii_uppercase());
            ensure!(
                hits.iter().any(|hit| hit.id == printer.id),
                "{} not found by model",
                printer.id
            );
            ensure!(hits.iter().all(|hit| hit.kind == kind), "search leaked another printer kind");
        }
    }

    let nonsense = data.books.search("zzqx-no-such-title");
    ensure!(nonsense.is_empty(), "nonsense query matched {} books", nonsense.len());
    Ok(())
}
