// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::{fmt_money, fmt_percent, parse_budget, pretty_table};
use anyhow::{Context, Result};

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(session, sub)?,
        Some(("show", _)) => show(session),
        _ => {}
    }
    Ok(())
}

fn set(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").context("missing amount")?;
    let budget = parse_budget(raw);
    session.set_budget(budget);
    println!("Monthly budget set to {}", fmt_money(&budget));
    Ok(())
}

fn show(session: &Session) {
    let summary = session.summary();
    let data = vec![vec![
        fmt_money(&summary.budget),
        fmt_money(&summary.total_expenses),
        fmt_percent(summary.budget_percentage),
        summary.budget_status.label().to_string(),
    ]];
    println!(
        "{}",
        pretty_table(&["Budget", "Spent", "Used", "Status"], data)
    );
}
