// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::db;
use pocketledger::ledger::Ledger;
use pocketledger::models::{NewTransaction, TxKind};
use pocketledger::periods::PeriodRegistry;
use pocketledger::utils::parse_utc_date;

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketledger.sqlite");

    {
        let conn = db::open_at(&path).unwrap();
        PeriodRegistry::new(&conn)
            .create(parse_utc_date("2025-01-01").unwrap(), None)
            .unwrap();
        Ledger::new(&conn, TxKind::Expense)
            .add(NewTransaction {
                amount: 12.5,
                description: "lunch".into(),
                label: "food".into(),
                date: parse_utc_date("2025-01-02").unwrap(),
            })
            .unwrap();
    }

    let conn = db::open_at(&path).unwrap();
    let periods = PeriodRegistry::new(&conn);
    assert_eq!(periods.list().len(), 1);
    assert!(periods.active().is_some());
    let expenses = Ledger::new(&conn, TxKind::Expense).list();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, 12.5);
}

#[test]
fn open_at_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketledger.sqlite");
    db::open_at(&path).unwrap();
    db::open_at(&path).unwrap();
}
