// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::periods::PeriodRegistry;
use crate::utils::{fmt_day, pretty_table};

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();
    let registry = PeriodRegistry::new(conn);
    let periods = registry.list();

    // 1) Transactions no period covers
    for kind in [TxKind::Expense, TxKind::Income] {
        for tx in Ledger::new(conn, kind).list() {
            if !periods.iter().any(|p| p.contains(tx.date)) {
                rows.push(vec![
                    "unattributed_tx".into(),
                    format!("{} {} on {}", kind.as_str(), tx.id, fmt_day(tx.date)),
                ]);
            }
        }
    }

    // 2) Overlapping periods (legal, but usually a mistake)
    for (i, a) in periods.iter().enumerate() {
        for b in periods.iter().skip(i + 1) {
            if a.start <= b.end && b.start <= a.end {
                rows.push(vec![
                    "overlapping_periods".into(),
                    format!("'{}' and '{}'", a.name, b.name),
                ]);
            }
        }
    }

    // 3) Stored amounts that would not pass entry validation
    for kind in [TxKind::Expense, TxKind::Income] {
        for tx in Ledger::new(conn, kind).list() {
            if !(tx.amount.is_finite() && tx.amount > 0.0) {
                rows.push(vec![
                    "non_positive_amount".into(),
                    format!("{} {}: {}", kind.as_str(), tx.id, tx.amount),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
