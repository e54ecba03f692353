//! Helpers for constructing entries in tests.

use std::sync::atomic::{AtomicI64, Ordering};

use rust_decimal::Decimal;

use crate::entry::{Entry, EntryId, EntryKind};

static NEXT_CREATED_AT: AtomicI64 = AtomicI64::new(1);

/// Builds an entry with a fresh id and a monotonically increasing
/// creation timestamp.
pub fn entry(title: &str, amount: Decimal, kind: EntryKind, date: &str) -> Entry {
    Entry {
        id: EntryId::random(),
        title: title.to_string(),
        amount,
        kind,
        date: date.parse().expect("test date did not parse"),
        created_at: NEXT_CREATED_AT.fetch_add(1, Ordering::Relaxed),
    }
}

pub fn income(title: &str, amount: Decimal, date: &str) -> Entry {
    entry(title, amount, EntryKind::Income, date)
}

pub fn expense(title: &str, amount: Decimal, date: &str) -> Entry {
    entry(title, amount, EntryKind::Expense, date)
}
