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
use pocketledger::utils::parse_utc_date;
use pocketledger::{cli, commands::transactions};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn
}

fn day(s: &str) -> DateTime<Utc> {
    parse_utc_date(s).unwrap()
}

fn seed(conn: &Connection) {
    PeriodRegistry::new(conn)
        .create(day("2025-01-01"), None)
        .unwrap();
    let expenses = Ledger::new(conn, TxKind::Expense);
    expenses
        .add(NewTransaction {
            amount: 10.0,
            description: "inside".into(),
            label: "food".into(),
            date: day("2025-01-10"),
        })
        .unwrap();
    expenses
        .add(NewTransaction {
            amount: 20.0,
            description: "outside".into(),
            label: "food".into(),
            date: day("2025-03-10"),
        })
        .unwrap();
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = sub.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn expense_list_defaults_to_active_period() {
    let conn = setup();
    seed(&conn);
    let m = list_matches(&["pocketledger", "expense", "list"]);
    let rows = transactions::query_rows(&conn, TxKind::Expense, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "inside");
}

#[test]
fn expense_list_all_ignores_periods() {
    let conn = setup();
    seed(&conn);
    let m = list_matches(&["pocketledger", "expense", "list", "--all"]);
    let rows = transactions::query_rows(&conn, TxKind::Expense, &m).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn expense_list_accepts_explicit_period_id() {
    let conn = setup();
    seed(&conn);
    let late = PeriodRegistry::new(&conn)
        .create(day("2025-03-01"), None)
        .unwrap();
    let m = list_matches(&["pocketledger", "expense", "list", "--period", &late.id]);
    let rows = transactions::query_rows(&conn, TxKind::Expense, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "outside");
}
