//! Pure aggregation of entry snapshots into totals and a monthly series.
//!
//! The surrounding application re-invokes [`summarize`] with a fresh
//! snapshot after every store change; nothing here keeps state between
//! calls.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use rust_decimal::Decimal;

use crate::entry::{Entry, EntryKind};

/// Maximum number of trailing months kept in [`Summary::monthly`].
pub const MONTHLY_SERIES_LEN: usize = 6;

/// Calendar month key, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable "MMM YY" label, e.g. "Jan 24".
    ///
    /// Month names are chrono's fixed English abbreviations, so the label
    /// does not depend on the system locale.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.label())
    }
}

/// Income and expense summed over one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub month: Month,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Totals and the chart-ready monthly series derived from one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub monthly: Vec<MonthlyBucket>,
}

impl Summary {
    /// Net of income over expenses. Derived, never stored.
    pub fn balance(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}

/// Computes totals and the monthly income/expense series for `entries`.
///
/// Buckets are sorted chronologically whatever order the entries arrive
/// in, and the series is truncated to the most recent
/// [`MONTHLY_SERIES_LEN`] months.
pub fn summarize(entries: &[Entry]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    for entry in entries {
        match entry.kind {
            EntryKind::Income => total_income += entry.amount,
            EntryKind::Expense => total_expense += entry.amount,
        }
    }

    let mut monthly: Vec<MonthlyBucket> = entries
        .iter()
        .map(|entry| (Month::of(entry.date), entry))
        .into_group_map()
        .into_iter()
        .map(|(month, group)| bucket(month, &group))
        .sorted_by_key(|bucket| bucket.month)
        .collect();
    if monthly.len() > MONTHLY_SERIES_LEN {
        monthly.drain(..monthly.len() - MONTHLY_SERIES_LEN);
    }

    Summary {
        total_income,
        total_expense,
        monthly,
    }
}

fn bucket(month: Month, entries: &[&Entry]) -> MonthlyBucket {
    let mut bucket = MonthlyBucket {
        month,
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
    };
    for entry in entries {
        match entry.kind {
            EntryKind::Income => bucket.income += entry.amount,
            EntryKind::Expense => bucket.expense += entry.amount,
        }
    }
    bucket
}
