// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value persistence seam.
//!
//! Every collection (expenses, income, periods) is one JSON value under one
//! key, and every mutation is a full read-modify-write of that value. Two
//! overlapping writers to the same key can therefore lose an update; with a
//! single-user CLI issuing operations sequentially this is an accepted
//! hazard, not something the store guards against.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const KEY_EXPENSES: &str = "expenses";
pub const KEY_INCOME: &str = "income";
pub const KEY_PERIODS: &str = "periods";
pub const KEY_PIN: &str = "pin";
pub const KEY_RECOVERY_CODE: &str = "recovery-code";

/// Minimal string-keyed store: `get`/`set`/`remove` of JSON-encoded values.
/// Backends are interchangeable behind this trait; the domain layer never
/// sees SQL.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl KvStore for Connection {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )
        .with_context(|| format!("Write '{}' failed", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.execute("DELETE FROM kv WHERE key=?1", params![key])
            .with_context(|| format!("Remove '{}' failed", key))?;
        Ok(())
    }
}

/// Read a JSON value, degrading to the default on a missing key, a failed
/// read, or a value that no longer parses. Reads never fail callers.
pub fn read_or_default<S: KvStore + ?Sized, T: DeserializeOwned + Default>(
    store: &S,
    key: &str,
) -> T {
    store
        .get(key)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Serialize and write a JSON value. Write failures propagate: a change that
/// did not land must not look like it did.
pub fn write_json<S: KvStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
