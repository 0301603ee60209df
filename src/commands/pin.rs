// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::auth::AuthGate;
use crate::error::Error;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let gate = AuthGate::new(conn);
    match m.subcommand() {
        Some(("setup", sub)) => {
            if gate.is_configured() {
                bail!("A PIN is already set up; use 'pin change' or 'pin reset'");
            }
            let pin = sub.get_one::<String>("new-pin").unwrap();
            let code = gate.setup(pin)?;
            println!("PIN set.");
            println!("Recovery code: {}", code);
            println!("Store it somewhere safe; it is the only way back in without the PIN.");
        }
        Some(("change", sub)) => {
            let current = m
                .get_one::<String>("pin")
                .map(String::as_str)
                .unwrap_or_default();
            let new_pin = sub.get_one::<String>("new-pin").unwrap();
            gate.change_pin(current, new_pin)?;
            println!("PIN changed.");
        }
        Some(("reset", sub)) => {
            let code = sub.get_one::<String>("code").unwrap();
            let new_pin = sub.get_one::<String>("new-pin").unwrap();
            match gate.reset_with_recovery_code(code, new_pin)? {
                Some(fresh) => {
                    println!("PIN reset.");
                    println!("New recovery code: {}", fresh);
                    println!("The old recovery code no longer works.");
                }
                None => return Err(Error::BadRecoveryCode.into()),
            }
        }
        _ => {}
    }
    Ok(())
}

/// Gate for ledger commands: a no-op until a PIN is set up, then the global
/// --pin must verify.
pub fn require_unlocked(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let gate = AuthGate::new(conn);
    if !gate.is_configured() {
        return Ok(());
    }
    match m.get_one::<String>("pin") {
        Some(pin) if gate.verify(pin) => Ok(()),
        Some(_) => bail!("Incorrect PIN"),
        None => bail!("A PIN is set up; pass it with --pin"),
    }
}
