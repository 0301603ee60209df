// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .version(crate_version!())
        .about("PIN-locked personal income/expense tracker with rolling budget periods")
        .arg(
            Arg::new("pin")
                .long("pin")
                .global(true)
                .value_name("PIN")
                .help("PIN unlocking ledger commands (required once one is set up)"),
        )
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(pin_cmd())
        .subcommand(period_cmd())
        .subcommand(tx_kind_cmd("expense", "category", "Record and manage expenses"))
        .subcommand(tx_kind_cmd("income", "source", "Record and manage income"))
        .subcommand(
            Command::new("tx")
                .about("Combined transaction views")
                .subcommand(
                    Command::new("list")
                        .about("List expenses and income merged, newest first")
                        .arg(scope_period())
                        .arg(scope_all())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Aggregate totals for the active (or a given) period")
                .arg(scope_period())
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}

fn pin_cmd() -> Command {
    Command::new("pin")
        .about("Set up and manage the PIN lock")
        .subcommand(
            Command::new("setup")
                .about("Set the initial PIN and print the recovery code")
                .arg(Arg::new("new-pin").value_name("PIN").required(true)),
        )
        .subcommand(
            Command::new("change")
                .about("Change the PIN (current PIN via --pin)")
                .arg(Arg::new("new-pin").value_name("NEW_PIN").required(true)),
        )
        .subcommand(
            Command::new("reset")
                .about("Reset a forgotten PIN with the recovery code")
                .arg(Arg::new("code").value_name("RECOVERY_CODE").required(true))
                .arg(Arg::new("new-pin").value_name("NEW_PIN").required(true)),
        )
}

fn period_cmd() -> Command {
    Command::new("period")
        .about("Manage budget periods (30-day ranges; one active at a time)")
        .subcommand(
            Command::new("add")
                .about("Create a period and make it active")
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("NAME")
                        .help("Display name; derived from the date range if omitted"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List periods, newest start first")
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("activate")
                .about("Make an existing period the active one")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a period (its transactions are kept)")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
}

fn tx_kind_cmd(noun: &'static str, label: &'static str, about: &'static str) -> Command {
    Command::new(noun)
        .about(about)
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .value_name("AMOUNT")
                        .required(true),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(
                    Arg::new("label")
                        .long(label)
                        .value_name(label)
                        .required(true),
                )
                .arg(
                    Arg::new("desc")
                        .long("desc")
                        .value_name("TEXT")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List records (active period by default)")
                .arg(scope_period())
                .arg(scope_all())
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit fields of a record")
                .arg(Arg::new("id").value_name("ID").required(true))
                .arg(Arg::new("amount").long("amount").value_name("AMOUNT"))
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("label").long(label).value_name(label))
                .arg(Arg::new("desc").long("desc").value_name("TEXT")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a record")
                .arg(Arg::new("id").value_name("ID").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every record of this kind")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the wipe"),
                ),
        )
}

fn scope_period() -> Arg {
    Arg::new("period")
        .long("period")
        .value_name("ID")
        .help("Scope to a specific period instead of the active one")
}

fn scope_all() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Ignore periods and show everything")
}

fn json_flag() -> Arg {
    Arg::new("json").long("json").action(ArgAction::SetTrue)
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)
}
