// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::models::Entry;
use crate::periods::PeriodRegistry;
use crate::stats;
use crate::utils::{fmt_day, fmt_money, maybe_print_json, pretty_table};

/// `tx list`: merged expense/income view, newest first.
pub fn handle_tx(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => tx_list(conn, sub),
        _ => Ok(()),
    }
}

#[derive(Serialize)]
struct EntryRow {
    kind: &'static str,
    id: String,
    date: String,
    amount: String,
    label: String,
    description: String,
}

fn tx_list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries: Vec<Entry> = if sub.get_flag("all") {
        stats::all_entries(conn)
    } else if let Some(id) = sub.get_one::<String>("period") {
        stats::entries_for_period(conn, id)
    } else {
        stats::entries_for_active(conn)
    };
    let data: Vec<EntryRow> = entries
        .into_iter()
        .map(|e| EntryRow {
            kind: e.kind.as_str(),
            id: e.tx.id,
            date: fmt_day(e.tx.date),
            amount: fmt_money(e.tx.amount),
            label: e.tx.label,
            description: e.tx.description,
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.kind.to_string(),
                    r.id.clone(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.label.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Kind", "Id", "Date", "Amount", "Label", "Description"],
                rows
            )
        );
    }
    Ok(())
}

/// `stats`: aggregate totals for the active (or a given) period.
pub fn handle_stats(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let registry = PeriodRegistry::new(conn);
    let (scope, s) = match m.get_one::<String>("period") {
        Some(id) => (
            registry
                .get(id)
                .map(|p| p.name)
                .unwrap_or_else(|| format!("unknown period {}", id)),
            stats::stats_for_period(conn, id),
        ),
        None => (
            registry
                .active()
                .map(|p| p.name)
                .unwrap_or_else(|| "no active period".to_string()),
            stats::stats_for_active(conn),
        ),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(s.total_income), s.income_count.to_string()],
            vec!["Expenses".to_string(), fmt_money(s.total_expenses), s.expense_count.to_string()],
            vec!["Balance".to_string(), fmt_money(s.balance), String::new()],
        ];
        println!("Period: {}", scope);
        println!("{}", pretty_table(&["", "Total", "Count"], rows));
    }
    Ok(())
}
