// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Domain errors surfaced through `anyhow` chains; callers that care can
/// downcast to match on a variant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("period '{0}' not found")]
    PeriodNotFound(String),

    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("PIN must be 4-8 digits")]
    InvalidPin,

    #[error("current PIN does not match")]
    PinMismatch,

    #[error("recovery code is not valid")]
    BadRecoveryCode,
}
