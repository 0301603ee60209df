// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! PIN gate with a recovery-code fallback.
//!
//! This is access gating for a local, single-user database, not a
//! cryptographic system: the PIN is compared by plain string equality and
//! stored as-is. The recovery code is a second single-slot secret; issuing a
//! new one overwrites (and thereby invalidates) the old.

use anyhow::Result;
use rand::random;

use crate::error::Error;
use crate::store::{KvStore, KEY_PIN, KEY_RECOVERY_CODE};

/// 32 symbols, visually ambiguous ones (I, O, 0, 1) excluded.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LEN: usize = 8;

pub struct AuthGate<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> AuthGate<'a, S> {
    pub fn new(store: &'a S) -> Self {
        AuthGate { store }
    }

    pub fn is_configured(&self) -> bool {
        self.stored_pin().is_some()
    }

    /// Store the PIN and issue the first recovery code.
    pub fn setup(&self, pin: &str) -> Result<String> {
        validate_pin(pin)?;
        self.store.set(KEY_PIN, pin)?;
        self.rotate_recovery_code()
    }

    /// Exact string equality against the stored PIN. An unreadable or unset
    /// PIN never verifies.
    pub fn verify(&self, pin: &str) -> bool {
        self.stored_pin().is_some_and(|stored| stored == pin)
    }

    /// Case-insensitive, whitespace- and dash-insensitive comparison.
    pub fn verify_recovery_code(&self, code: &str) -> bool {
        match self.store.get(KEY_RECOVERY_CODE).ok().flatten() {
            Some(stored) => normalize_code(code) == normalize_code(&stored),
            None => false,
        }
    }

    /// Verify the recovery code and, on success, store the new PIN and
    /// rotate the code. Returns the fresh code so the caller can show it.
    pub fn reset_with_recovery_code(&self, code: &str, new_pin: &str) -> Result<Option<String>> {
        if !self.verify_recovery_code(code) {
            return Ok(None);
        }
        validate_pin(new_pin)?;
        self.store.set(KEY_PIN, new_pin)?;
        Ok(Some(self.rotate_recovery_code()?))
    }

    pub fn change_pin(&self, current_pin: &str, new_pin: &str) -> Result<()> {
        if !self.verify(current_pin) {
            return Err(Error::PinMismatch.into());
        }
        validate_pin(new_pin)?;
        self.store.set(KEY_PIN, new_pin)?;
        Ok(())
    }

    fn stored_pin(&self) -> Option<String> {
        self.store.get(KEY_PIN).ok().flatten()
    }

    fn rotate_recovery_code(&self) -> Result<String> {
        let code = generate_code();
        self.store.set(KEY_RECOVERY_CODE, &code)?;
        Ok(code)
    }
}

fn validate_pin(pin: &str) -> Result<()> {
    let ok = (4..=8).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidPin.into())
    }
}

/// `XXXX-XXXX` over [`CODE_ALPHABET`].
fn generate_code() -> String {
    let bytes: [u8; CODE_LEN] = random();
    let symbols: Vec<u8> = bytes
        .iter()
        // 256 is a multiple of 32, so the modulo is unbiased.
        .map(|b| CODE_ALPHABET[(b % CODE_ALPHABET.len() as u8) as usize])
        .collect();
    format!(
        "{}-{}",
        String::from_utf8_lossy(&symbols[..CODE_LEN / 2]),
        String::from_utf8_lossy(&symbols[CODE_LEN / 2..])
    )
}

fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
