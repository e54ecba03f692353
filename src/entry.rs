//! Domain types for recorded income and expense entries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque entry identifier, assigned by the entry store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Whether an entry adds to or subtracts from the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown entry kind {0:?}, expected \"income\" or \"expense\"")]
pub struct ParseEntryKindError(String);

impl FromStr for EntryKind {
    type Err = ParseEntryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(ParseEntryKindError(other.to_string())),
        }
    }
}

/// A single recorded income or expense.
///
/// Entries are immutable once stored; there is no update operation, only
/// create and delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub amount: Decimal,
    pub kind: EntryKind,
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch at creation time.
    pub created_at: i64,
}

/// A validated draft entry, not yet assigned an id by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
    title: String,
    amount: Decimal,
    kind: EntryKind,
    date: NaiveDate,
}

impl NewEntry {
    /// Validates user input into a draft: the title must be non-empty
    /// after trimming and the amount strictly positive.
    pub fn new(
        title: &str,
        amount: Decimal,
        kind: EntryKind,
        date: NaiveDate,
    ) -> Result<Self, InvalidEntry> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InvalidEntry::EmptyTitle);
        }
        if amount <= Decimal::ZERO {
            return Err(InvalidEntry::NonPositiveAmount(amount));
        }
        Ok(Self {
            title: title.to_string(),
            amount,
            kind,
            date,
        })
    }

    /// Completes the draft with the fields the store assigns.
    pub fn into_entry(self, id: EntryId, created_at: i64) -> Entry {
        Entry {
            id,
            title: self.title,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            created_at,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidEntry {
    #[error("entry title must not be empty")]
    EmptyTitle,
    #[error("entry amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::*;

    fn date() -> NaiveDate {
        "2024-01-05".parse().unwrap()
    }

    #[test_case("income" => Ok(EntryKind::Income))]
    #[test_case("expense" => Ok(EntryKind::Expense))]
    #[test_case("Income" => matches Err(_); "case sensitive")]
    #[test_case("transfer" => matches Err(_); "no third kind")]
    fn parse_kind(s: &str) -> Result<EntryKind, ParseEntryKindError> {
        s.parse()
    }

    #[test]
    fn new_entry_trims_the_title() {
        let draft = NewEntry::new("  Rent  ", dec!(10), EntryKind::Expense, date()).unwrap();
        let entry = draft.into_entry(EntryId::random(), 1);
        assert_eq!("Rent", entry.title);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            Err(InvalidEntry::EmptyTitle),
            NewEntry::new("   ", dec!(10), EntryKind::Expense, date())
        );
    }

    #[test_case(dec!(0); "zero")]
    #[test_case(dec!(-5); "negative")]
    fn non_positive_amount_is_rejected(amount: Decimal) {
        assert_eq!(
            Err(InvalidEntry::NonPositiveAmount(amount)),
            NewEntry::new("Rent", amount, EntryKind::Expense, date())
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            "\"income\"",
            serde_json::to_string(&EntryKind::Income).unwrap()
        );
        assert_eq!(
            "\"expense\"",
            serde_json::to_string(&EntryKind::Expense).unwrap()
        );
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = crate::testutil::income("Salary", dec!(50000), "2024-01-05");
        let encoded = serde_json::to_string(&entry).unwrap();
        let decoded: Entry = serde_json::from_str(&encoded).unwrap();
        assert_eq!(entry, decoded);
    }
}
