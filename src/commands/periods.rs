// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::periods::PeriodRegistry;
use crate::utils::{fmt_day, maybe_print_json, parse_utc_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("activate", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            PeriodRegistry::new(conn).set_active(id)?;
            println!("Period {} is now active", id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let registry = PeriodRegistry::new(conn);
            if registry.delete(id)? {
                match registry.active() {
                    Some(p) => println!("Deleted period {}; '{}' is now active", id, p.name),
                    None => println!("Deleted period {}; no period is active", id),
                }
            } else {
                println!("No period with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let start = parse_utc_date(sub.get_one::<String>("start").unwrap())?;
    let name = sub.get_one::<String>("name").cloned();
    let period = PeriodRegistry::new(conn).create(start, name)?;
    println!(
        "Created period '{}' ({} to {}), now active (id: {})",
        period.name,
        fmt_day(period.start),
        fmt_day(period.end),
        period.id
    );
    Ok(())
}

#[derive(Serialize)]
struct PeriodRow {
    id: String,
    name: String,
    start: String,
    end: String,
    active: bool,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let registry = PeriodRegistry::new(conn);
    let active_id = registry.active().map(|p| p.id);
    let data: Vec<PeriodRow> = registry
        .list()
        .into_iter()
        .map(|p| PeriodRow {
            active: Some(&p.id) == active_id.as_ref(),
            start: fmt_day(p.start),
            end: fmt_day(p.end),
            id: p.id,
            name: p.name,
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.start.clone(),
                    r.end.clone(),
                    if r.active { "*".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Start", "End", "Active"], rows)
        );
    }
    Ok(())
}
