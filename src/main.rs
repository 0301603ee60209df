// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketledger::models::TxKind;
use pocketledger::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("pin", sub)) => commands::pin::handle(&conn, sub)?,
        Some(("period", sub)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::periods::handle(&conn, sub)?;
        }
        Some(("expense", sub)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::transactions::handle(&conn, TxKind::Expense, sub)?;
        }
        Some(("income", sub)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::transactions::handle(&conn, TxKind::Income, sub)?;
        }
        Some(("tx", sub)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::reports::handle_tx(&conn, sub)?;
        }
        Some(("stats", sub)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::reports::handle_stats(&conn, sub)?;
        }
        Some(("doctor", _)) => {
            commands::pin::require_unlocked(&conn, &matches)?;
            commands::doctor::handle(&conn)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
