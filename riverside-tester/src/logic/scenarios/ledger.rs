use anyhow::{Context, Result, bail, ensure};
use rand::Rng;
use riverside_core::constants::{DEFAULT_SEED_BALANCE, POINTS_STORAGE_KEY};
use riverside_core::{ChangeOrigin, ClaimError, PointsEvent, PointsStore};
use std::cell::RefCell;
use std::rc::Rc;

use super::ScenarioCtx;

const STEPS: usize = 40;

fn record_events(store: &PointsStore) -> (Rc<RefCell<Vec<PointsEvent>>>, riverside_core::Subscription) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let subscription = store.subscribe(move |event| sink.borrow_mut().push(*event));
    (events, subscription)
}

pub fn points_ledger(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let start = ctx.rng.gen_range(0..=2_000_u64);
    let (store, storage) = ctx.store_with(start);
    let (events, _subscription) = record_events(&store);
    let mut expected = store.read();
    ensure!(expected == start, "seeded balance read back as {expected}, not {start}");

    for step in 0..STEPS {
        let (op, got) = match ctx.rng.gen_range(0..3) {
            0 => {
                let delta = ctx.rng.gen_range(-500..=500_i64);
                expected = expected.saturating_add_signed(delta);
                (format!("add({delta})"), store.add(delta))
            }
            1 => {
                let whole = ctx.rng.gen_range(-100..3_000_i32);
                let hundredths = ctx.rng.gen_range(0..100_u32);
                let value = f64::from(whole) + f64::from(hundredths) / 100.0;
                expected = u64::try_from(whole).unwrap_or(0);
                (format!("set({value})"), store.set(value))
            }
            _ => {
                let a = ctx.rng.gen_range(0..1_000_u64);
                let b = ctx.rng.gen_range(0..1_000_u64);
                let got = store.set_random_with(&mut ctx.rng, a, b);
                ensure!(
                    a.min(b) <= got && got <= a.max(b),
                    "step {step}: set_random({a}, {b}) gave {got}"
                );
                expected = got;
                (format!("set_random({a}, {b})"), got)
            }
        };
        ensure!(got == expected, "step {step}: {op} returned {got}, expected {expected}");
        ensure!(store.read() == expected, "step {step}: read disagrees after {op}");
        ensure!(
            storage.raw(POINTS_STORAGE_KEY).as_deref() == Some(expected.to_string().as_str()),
            "step {step}: {op} was not persisted"
        );
        let last = events.borrow().last().copied();
        ensure!(
            matches!(last, Some(PointsEvent { balance, origin: ChangeOrigin::Local, .. }) if balance == expected),
            "step {step}: subscriber saw {last:?} after {op}"
        );
    }
    ensure!(events.borrow().len() == STEPS, "expected one notification per mutation");

    let reloaded = PointsStore::new(storage.clone());
    ensure!(reloaded.read() == expected, "balance did not survive a reload");

    storage.clear(POINTS_STORAGE_KEY);
    let fresh = PointsStore::new(storage.clone());
    ensure!(
        fresh.read() == DEFAULT_SEED_BALANCE
            && storage.raw(POINTS_STORAGE_KEY) == Some(DEFAULT_SEED_BALANCE.to_string()),
        "absent key should initialize to the seed balance"
    );
    Ok(())
}

pub fn cross_tab_sync(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    const GARBAGE: [&str; 6] = ["abc", "-12", "NaN", "", "1e400", "12 points"];

    let start = ctx.rng.gen_range(0..=500_u64);
    let (store, storage) = ctx.store_with(start);
    let (events, _subscription) = record_events(&store);

    for step in 0..STEPS {
        let (raw, want) = match ctx.rng.gen_range(0..4) {
            0 => {
                let n = ctx.rng.gen_range(0..5_000_u64);
                (Some(n.to_string()), n)
            }
            1 => {
                let n = ctx.rng.gen_range(0..5_000_u64);
                (Some(format!("  {n}.{} ", ctx.rng.gen_range(0..10))), n)
            }
            2 => {
                let junk = ctx.pick(&GARBAGE).copied().unwrap_or_default();
                (Some(junk.to_string()), 0)
            }
            _ => (None, 0),
        };
        // The other tab writes; this one only hears about it.
        match &raw {
            Some(value) => storage.put_raw(POINTS_STORAGE_KEY, value),
            None => storage.clear(POINTS_STORAGE_KEY),
        }
        let got = store.apply_external(raw.as_deref());
        ensure!(got == want, "step {step}: external {raw:?} gave {got}, expected {want}");
        ensure!(store.balance() == want, "step {step}: cached balance not updated");
        ensure!(
            storage.raw(POINTS_STORAGE_KEY) == raw,
            "step {step}: applying an external value must not write back"
        );
        let last = events.borrow().last().copied();
        ensure!(
            matches!(last, Some(PointsEvent { balance, origin: ChangeOrigin::External, .. }) if balance == want),
            "step {step}: subscriber saw {last:?}"
        );
    }
    ensure!(events.borrow().len() == STEPS, "expected one notification per external change");

    // A second tab sharing the storage sees local writes on its next read.
    let other_tab = PointsStore::new(storage.clone());
    let before = other_tab.read();
    let after = other_tab.add(10);
    ensure!(after == before + 10, "other tab add gave {after} from {before}");
    ensure!(store.read() == after, "first tab did not read the other tab's write");
    Ok(())
}

pub fn reward_claims(ctx: &mut ScenarioCtx<'_>) -> Result<()> {
    let data = ctx.data;
    let rewards = &data.rewards.rewards;
    ensure!(!rewards.is_empty(), "rewards catalog is empty");

    let start = ctx.rng.gen_range(0..=400_u64);
    let (store, _storage) = ctx.store_with(start);
    let services = ctx.services(store.clone());

    for step in 0..STEPS {
        let reward = ctx.pick(rewards).context("no reward to pick")?;
        let before = store.read();
        for (listed, affordability) in data.rewards.with_affordability(before) {
            ensure!(
                affordability.is_claimable() == (before >= listed.cost),
                "step {step}: {} listed as {affordability:?} at {before}",
                listed.id
            );
        }
        match services.claim(&reward.id) {
            Ok(receipt) => {
                ensure!(before >= reward.cost, "step {step}: claimed {} while short", reward.id);
                ensure!(
                    receipt.balance_before == before && receipt.balance_after == before - reward.cost,
                    "step {step}: receipt {receipt:?} does not match {before} - {}",
                    reward.cost
                );
                ensure!(store.read() == receipt.balance_after, "step {step}: store not debited");
            }
            Err(ClaimError::InsufficientBalance { shortfall, .. }) => {
                ensure!(before < reward.cost, "step {step}: refused {} at {before}", reward.id);
                ensure!(shortfall == reward.cost - before, "step {step}: shortfall {shortfall}");
                ensure!(store.read() == before, "step {step}: refused claim touched the balance");
            }
            Err(err) => bail!("step {step}: unexpected refusal: {err}"),
        }
        if ctx.rng.gen_bool(0.5) {
            store.add(ctx.rng.gen_range(0..200));
        }
    }

    let before = store.read();
    ensure!(
        matches!(services.claim("no-such-reward"), Err(ClaimError::UnknownReward(_))),
        "unknown reward id should be refused"
    );
    ensure!(store.read() == before, "unknown reward touched the balance");

    // The same reward can be claimed again while the balance allows.
    let cheapest = rewards
        .iter()
        .min_by_key(|r| r.cost)
        .context("no cheapest reward")?;
    store.set(f64::from(u32::try_from(cheapest.cost * 2).unwrap_or(u32::MAX)));
    services.claim(&cheapest.id).context("first repeat claim")?;
    services.claim(&cheapest.id).context("second repeat claim")?;
    ensure!(store.read() == 0, "two claims of {} should empty the balance", cheapest.id);
    Ok(())
}
