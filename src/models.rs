// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the ledger a transaction sits on. Expenses and income are
/// persisted as separate collections; the kind only travels with a record in
/// merged views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            TxKind::Expense => crate::store::KEY_EXPENSES,
            TxKind::Income => crate::store::KEY_INCOME,
        }
    }

    /// Name of the free-text label field as the user sees it.
    pub fn label_field(self) -> &'static str {
        match self {
            TxKind::Expense => "category",
            TxKind::Income => "source",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Income => "income",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub description: String,
    /// Expense category or income source; free text, no referential
    /// constraint against any suggested list.
    pub label: String,
    pub date: DateTime<Utc>,
}

/// Transaction fields before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub label: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub id: String,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    /// Date-range membership, inclusive on both ends.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The persisted period registry. Holding the active id as a single field
/// (rather than a flag on every record) makes at-most-one-active structural.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodSet {
    pub periods: Vec<Period>,
    pub active_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

/// A transaction tagged with its kind, for merged expense+income views.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub kind: TxKind,
    #[serde(flatten)]
    pub tx: Transaction,
}
