// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parse a CLI day date into the timestamp stored on records (midnight UTC).
pub fn parse_utc_date(s: &str) -> Result<DateTime<Utc>> {
    let day = parse_date(s)?;
    Ok(Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN)))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn fmt_money(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn fmt_day(d: DateTime<Utc>) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
