// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::summary::Summary;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const PROGRESS_WIDTH: usize = 20;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let summary = session.summary();
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        print_summary(&summary);
    }
    Ok(())
}

/// `[#####---------------]` for the share of the budget used.
pub fn progress_bar(summary: &Summary) -> String {
    let filled = (summary.progress_percent() / Decimal::ONE_HUNDRED * Decimal::from(PROGRESS_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(PROGRESS_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

pub fn print_summary(summary: &Summary) {
    let data = vec![
        vec!["Balance".to_string(), fmt_money(&summary.balance)],
        vec!["Income".to_string(), fmt_money(&summary.total_income)],
        vec!["Expenses".to_string(), fmt_money(&summary.total_expenses)],
        vec!["Budget".to_string(), fmt_money(&summary.budget)],
        vec![
            "Used".to_string(),
            format!(
                "{} {} ({})",
                progress_bar(summary),
                fmt_percent(summary.budget_percentage),
                summary.budget_status.label()
            ),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount"], data));
}
