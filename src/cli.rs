// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::config::MAX_CHART_MONTHS;

/// Arguments of the binary itself.
pub fn build_cli() -> Command {
    Command::new("expensetrackr")
        .version(clap::crate_version!())
        .about("Track income and expenses for one session, with budget and chart summaries")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file (defaults to settings.json in the config dir)"),
        )
        .arg(
            Arg::new("budget")
                .long("budget")
                .value_name("AMOUNT")
                .help("Monthly budget, overriding the settings file"),
        )
        .arg(
            Arg::new("empty")
                .long("empty")
                .action(ArgAction::SetTrue)
                .help("Start without the sample transactions"),
        )
        .arg(
            Arg::new("sequential-ids")
                .long("sequential-ids")
                .action(ArgAction::SetTrue)
                .help("Number new transactions 1, 2, 3... instead of by clock"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (repeat for debug output)"),
        )
        .subcommand(Command::new("shell").about("Interactive session (default)"))
        .subcommand(
            Command::new("run")
                .about("Run session commands from a file, one per line")
                .arg(Arg::new("script").required(true).value_name("SCRIPT")),
        )
        .subcommand(Command::new("demo").about("Print summary, transactions and charts, then exit"))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

/// Every field is optional: `add` falls back to the blank form and `edit`
/// to the record being edited.
fn transaction_fields(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"]),
    )
    .arg(Arg::new("amount").long("amount"))
    .arg(Arg::new("category").long("category"))
    .arg(Arg::new("description").long("description"))
    .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
}

/// Grammar of one line typed into the session.
pub fn build_shell() -> Command {
    Command::new("expensetrackr")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(
            Command::new("tx")
                .about("Add, edit, remove and list transactions")
                .subcommand_required(true)
                .subcommand(transaction_fields(
                    Command::new("add").about("Record a transaction"),
                ))
                .subcommand(transaction_fields(
                    Command::new("edit")
                        .about("Replace fields of an existing transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Transactions, newest first")
                        .arg(Arg::new("type").long("type").default_value("all"))
                        .arg(Arg::new("category").long("category").default_value("all")),
                )),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Balance, income, expenses and budget usage"),
        ))
        .subcommand(
            Command::new("budget")
                .about("Show or set the monthly budget")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set").arg(Arg::new("amount").required(true).value_name("AMOUNT")),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("category")
                .about("Expense categories")
                .subcommand_required(true)
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("chart")
                .about("Spending by category and month")
                .subcommand_required(true)
                .subcommand(
                    Command::new("pie")
                        .about("Expenses by category")
                        .arg(Arg::new("svg").long("svg").value_name("PATH")),
                )
                .subcommand(
                    Command::new("bars")
                        .about("Income and expenses per month")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(u32).range(1..=i64::from(MAX_CHART_MONTHS))),
                        )
                        .arg(Arg::new("end").long("end").value_name("YYYY-MM"))
                        .arg(Arg::new("svg").long("svg").value_name("PATH")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a file")
                .arg(Arg::new("format").long("format").default_value("csv"))
                .arg(Arg::new("out").long("out").value_name("PATH")),
        )
        .subcommand(Command::new("quit").visible_alias("exit").about("End the session"))
}
