// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use pocketledger::ledger::Ledger;
use pocketledger::models::{NewTransaction, TxKind};
use pocketledger::periods::PeriodRegistry;
use pocketledger::stats;
use pocketledger::utils::parse_utc_date;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

fn day(s: &str) -> DateTime<Utc> {
    parse_utc_date(s).unwrap()
}

fn record(conn: &Connection, kind: TxKind, amount: f64, date: &str) -> String {
    Ledger::new(conn, kind)
        .add(NewTransaction {
            amount,
            description: "test entry".into(),
            label: "misc".into(),
            date: day(date),
        })
        .unwrap()
        .id
}

#[test]
fn expense_in_period_shows_in_stats() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    record(&conn, TxKind::Expense, 50.0, "2025-01-15");

    let s = stats::stats_for_period(&conn, &a.id);
    assert_eq!(s.total_expenses, 50.0);
    assert_eq!(s.total_income, 0.0);
    assert_eq!(s.balance, -50.0);
    assert_eq!(s.expense_count, 1);
    assert_eq!(s.income_count, 0);
}

#[test]
fn membership_is_inclusive_on_both_bounds() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    record(&conn, TxKind::Expense, 1.0, "2025-01-01"); // start day
    record(&conn, TxKind::Expense, 2.0, "2025-01-31"); // end day
    record(&conn, TxKind::Expense, 4.0, "2025-02-01"); // out of range
    record(&conn, TxKind::Expense, 8.0, "2024-12-31"); // out of range

    let s = stats::stats_for_period(&conn, &a.id);
    assert_eq!(s.expense_count, 2);
    assert_eq!(s.total_expenses, 3.0);
}

#[test]
fn stats_by_id_ignore_which_period_is_active() {
    let conn = setup();
    let registry = PeriodRegistry::new(&conn);
    let a = registry.create(day("2025-01-01"), None).unwrap();
    let b = registry.create(day("2025-02-01"), None).unwrap();
    assert!(registry.is_active(&b.id));

    // Falls in A's range although B is active
    record(&conn, TxKind::Income, 1000.0, "2025-01-10");
    let s = stats::stats_for_period(&conn, &a.id);
    assert_eq!(s.total_income, 1000.0);
    assert_eq!(s.income_count, 1);
}

#[test]
fn balance_identity_holds() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    record(&conn, TxKind::Income, 1000.0, "2025-01-02");
    record(&conn, TxKind::Income, 250.5, "2025-01-03");
    record(&conn, TxKind::Expense, 50.0, "2025-01-04");
    record(&conn, TxKind::Expense, 19.5, "2025-01-05");

    let s = stats::stats_for_period(&conn, &a.id);
    assert_eq!(s.total_income, 1250.5);
    assert_eq!(s.total_expenses, 69.5);
    assert_eq!(s.balance, s.total_income - s.total_expenses);
    assert_eq!(s.income_count, 2);
    assert_eq!(s.expense_count, 2);
}

#[test]
fn unknown_period_aggregates_as_zero() {
    let conn = setup();
    record(&conn, TxKind::Expense, 50.0, "2025-01-15");
    let s = stats::stats_for_period(&conn, "no-such-period");
    assert_eq!(s, Default::default());
}

#[test]
fn no_active_period_aggregates_as_zero() {
    let conn = setup();
    let registry = PeriodRegistry::new(&conn);
    let a = registry.create(day("2025-01-01"), None).unwrap();
    record(&conn, TxKind::Expense, 50.0, "2025-01-15");
    registry.delete(&a.id).unwrap();

    assert!(registry.active().is_none());
    let s = stats::stats_for_active(&conn);
    assert_eq!(s, Default::default());
}

#[test]
fn updated_amount_is_reflected_without_duplicates() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    let id = record(&conn, TxKind::Expense, 50.0, "2025-01-15");

    let ledger = Ledger::new(&conn, TxKind::Expense);
    let mut tx = ledger.list().into_iter().find(|t| t.id == id).unwrap();
    tx.amount = 75.0;
    assert!(ledger.update(tx).unwrap());

    let s = stats::stats_for_period(&conn, &a.id);
    assert_eq!(s.total_expenses, 75.0);
    assert_eq!(s.expense_count, 1);
}

#[test]
fn merged_view_sorts_by_date_then_kind_then_id() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    record(&conn, TxKind::Income, 10.0, "2025-01-05");
    record(&conn, TxKind::Expense, 20.0, "2025-01-20");
    record(&conn, TxKind::Expense, 30.0, "2025-01-05");

    let entries = stats::entries_for_period(&conn, &a.id);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].tx.date, day("2025-01-20"));
    // Same-day tie: expense sorts before income
    assert_eq!(entries[1].kind, TxKind::Expense);
    assert_eq!(entries[2].kind, TxKind::Income);
    assert_eq!(entries[1].tx.date, entries[2].tx.date);
}

#[test]
fn merged_view_filters_by_membership() {
    let conn = setup();
    let a = PeriodRegistry::new(&conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    record(&conn, TxKind::Expense, 20.0, "2025-01-20");
    record(&conn, TxKind::Income, 10.0, "2025-03-05");

    let entries = stats::entries_for_period(&conn, &a.id);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, TxKind::Expense);

    assert!(stats::entries_for_period(&conn, "no-such-period").is_empty());
    assert_eq!(stats::all_entries(&conn).len(), 2);
}
