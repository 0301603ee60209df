// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger store: durable CRUD over the expense and income collections.
//!
//! Each kind is a flat list under its own key, newest first. Unreadable or
//! corrupt state reads as empty; failed writes propagate.

use anyhow::Result;
use uuid::Uuid;

use crate::error::Error;
use crate::models::{NewTransaction, Transaction, TxKind};
use crate::store::{self, KvStore};

pub struct Ledger<'a, S: KvStore + ?Sized> {
    store: &'a S,
    kind: TxKind,
}

impl<'a, S: KvStore + ?Sized> Ledger<'a, S> {
    pub fn new(store: &'a S, kind: TxKind) -> Self {
        Ledger { store, kind }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    /// Full collection in stored order (newest first).
    pub fn list(&self) -> Vec<Transaction> {
        store::read_or_default(self.store, self.kind.storage_key())
    }

    /// Validate, assign a fresh id, prepend, persist. Returns the stored
    /// record.
    pub fn add(&self, new: NewTransaction) -> Result<Transaction> {
        if !(new.amount.is_finite() && new.amount > 0.0) {
            return Err(Error::InvalidAmount(new.amount).into());
        }
        if new.description.trim().is_empty() {
            return Err(Error::EmptyField("description").into());
        }
        if new.label.trim().is_empty() {
            return Err(Error::EmptyField(self.kind.label_field()).into());
        }

        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: new.amount,
            description: new.description,
            label: new.label,
            date: new.date,
        };
        let mut all = self.list();
        all.insert(0, tx.clone());
        self.save(&all)?;
        Ok(tx)
    }

    /// Replace the record with a matching id in place (position unchanged).
    /// Returns false, without writing, when the id is unknown.
    pub fn update(&self, record: Transaction) -> Result<bool> {
        let mut all = self.list();
        match all.iter_mut().find(|t| t.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.save(&all)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove by id. Returns false when no record matched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save(&all)?;
        Ok(true)
    }

    /// Empty the collection. Administrative reset.
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    fn save(&self, all: &[Transaction]) -> Result<()> {
        store::write_json(self.store, self.kind.storage_key(), all)
    }
}
