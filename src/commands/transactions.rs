// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::{NewTransaction, Transaction, TxKind};
use crate::periods::PeriodRegistry;
use crate::utils::{fmt_day, fmt_money, maybe_print_json, parse_amount, parse_utc_date, pretty_table};

pub fn handle(conn: &Connection, kind: TxKind, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, kind, sub)?,
        Some(("list", sub)) => list(conn, kind, sub)?,
        Some(("edit", sub)) => edit(conn, kind, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            if Ledger::new(conn, kind).delete(id)? {
                println!("Deleted {} {}", kind.as_str(), id);
            } else {
                println!("No {} with id {}", kind.as_str(), id);
            }
        }
        Some(("clear", sub)) => {
            if !sub.get_flag("yes") {
                bail!("Refusing to wipe all {} records without --yes", kind.as_str());
            }
            Ledger::new(conn, kind).clear()?;
            println!("Cleared all {} records", kind.as_str());
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_utc_date(sub.get_one::<String>("date").unwrap())?;
    let label = sub.get_one::<String>("label").unwrap().clone();
    let description = sub.get_one::<String>("desc").unwrap().clone();

    let tx = Ledger::new(conn, kind).add(NewTransaction {
        amount,
        description,
        label,
        date,
    })?;
    println!(
        "Recorded {} {} on {} ({}: {}, id: {})",
        kind.as_str(),
        fmt_money(tx.amount),
        fmt_day(tx.date),
        kind.label_field(),
        tx.label,
        tx.id
    );
    Ok(())
}

fn edit(conn: &Connection, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let ledger = Ledger::new(conn, kind);
    let Some(mut tx) = ledger.list().into_iter().find(|t| t.id == *id) else {
        println!("No {} with id {}", kind.as_str(), id);
        return Ok(());
    };
    if let Some(a) = sub.get_one::<String>("amount") {
        let amount = parse_amount(a)?;
        if !(amount.is_finite() && amount > 0.0) {
            bail!("Amount must be positive, got {}", amount);
        }
        tx.amount = amount;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = parse_utc_date(d)?;
    }
    if let Some(l) = sub.get_one::<String>("label") {
        tx.label = l.clone();
    }
    if let Some(s) = sub.get_one::<String>("desc") {
        tx.description = s.clone();
    }
    ledger.update(tx)?;
    println!("Updated {} {}", kind.as_str(), id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub amount: String,
    pub label: String,
    pub description: String,
}

fn list(conn: &Connection, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, kind, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.label.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        let label_hdr = match kind {
            TxKind::Expense => "Category",
            TxKind::Income => "Source",
        };
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Amount", label_hdr, "Description"], rows)
        );
    }
    Ok(())
}

/// Records of one kind, scoped like the merged views: the active period by
/// default, a named period with --period, everything with --all.
pub fn query_rows(
    conn: &Connection,
    kind: TxKind,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let all = Ledger::new(conn, kind).list();
    let scoped: Vec<Transaction> = if sub.get_flag("all") {
        all
    } else {
        let registry = PeriodRegistry::new(conn);
        let period = match sub.get_one::<String>("period") {
            Some(id) => registry.get(id),
            None => registry.active(),
        };
        match period {
            Some(p) => all.into_iter().filter(|t| p.contains(t.date)).collect(),
            None => Vec::new(),
        }
    };
    Ok(scoped
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: fmt_day(t.date),
            amount: fmt_money(t.amount),
            label: t.label,
            description: t.description,
        })
        .collect())
}
