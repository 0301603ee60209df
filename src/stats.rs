// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation over the ledger, scoped to a period. Pure read-side: every
//! query re-derives from the stored collections, nothing is cached.
//!
//! Sums are plain f64 addition. Good enough for display-level personal
//! finance; drift at the margins is a known limitation.

use crate::ledger::Ledger;
use crate::models::{Entry, Period, PeriodStats, Transaction, TxKind};
use crate::periods::PeriodRegistry;
use crate::store::KvStore;

/// Aggregate statistics for the period with the given id. A nonexistent
/// period aggregates as empty, not as an error.
pub fn stats_for_period<S: KvStore + ?Sized>(store: &S, period_id: &str) -> PeriodStats {
    match PeriodRegistry::new(store).get(period_id) {
        Some(period) => stats_in(store, &period),
        None => PeriodStats::default(),
    }
}

/// Aggregate statistics for the active period; zeroed when none is active.
pub fn stats_for_active<S: KvStore + ?Sized>(store: &S) -> PeriodStats {
    match PeriodRegistry::new(store).active() {
        Some(period) => stats_in(store, &period),
        None => PeriodStats::default(),
    }
}

fn stats_in<S: KvStore + ?Sized>(store: &S, period: &Period) -> PeriodStats {
    let income = in_range(Ledger::new(store, TxKind::Income).list(), period);
    let expenses = in_range(Ledger::new(store, TxKind::Expense).list(), period);

    let total_income: f64 = income.iter().map(|t| t.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|t| t.amount).sum();
    PeriodStats {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        income_count: income.len(),
        expense_count: expenses.len(),
    }
}

/// Merged expense and income records inside the period's range, newest
/// first. Identical timestamps order by kind, then id, so output is stable.
pub fn entries_for_period<S: KvStore + ?Sized>(store: &S, period_id: &str) -> Vec<Entry> {
    match PeriodRegistry::new(store).get(period_id) {
        Some(period) => entries_in(store, &period),
        None => Vec::new(),
    }
}

pub fn entries_for_active<S: KvStore + ?Sized>(store: &S) -> Vec<Entry> {
    match PeriodRegistry::new(store).active() {
        Some(period) => entries_in(store, &period),
        None => Vec::new(),
    }
}

/// All records of both kinds merged and sorted, ignoring periods.
pub fn all_entries<S: KvStore + ?Sized>(store: &S) -> Vec<Entry> {
    let mut entries: Vec<Entry> = tagged(store, TxKind::Expense)
        .chain(tagged(store, TxKind::Income))
        .collect();
    sort_entries(&mut entries);
    entries
}

fn entries_in<S: KvStore + ?Sized>(store: &S, period: &Period) -> Vec<Entry> {
    let mut entries: Vec<Entry> = tagged(store, TxKind::Expense)
        .chain(tagged(store, TxKind::Income))
        .filter(|e| period.contains(e.tx.date))
        .collect();
    sort_entries(&mut entries);
    entries
}

fn tagged<S: KvStore + ?Sized>(store: &S, kind: TxKind) -> impl Iterator<Item = Entry> {
    Ledger::new(store, kind)
        .list()
        .into_iter()
        .map(move |tx| Entry { kind, tx })
}

fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.tx.date
            .cmp(&a.tx.date)
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| a.tx.id.cmp(&b.tx.id))
    });
}

fn in_range(all: Vec<Transaction>, period: &Period) -> Vec<Transaction> {
    all.into_iter().filter(|t| period.contains(t.date)).collect()
}
