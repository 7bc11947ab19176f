// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::charts::{MonthlySeries, PieLayout, Wedge, pie_wedges, render_bars_svg, render_pie_svg};
use crate::error::{self, TrackerError};
use crate::session::Session;
use crate::utils::{fmt_money, parse_month, pretty_table};
use anyhow::{Context, Result};

const BAR_WIDTH: usize = 30;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("pie", sub)) => pie(session, sub)?,
        Some(("bars", sub)) => bars(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn bar(fraction: f64) -> String {
    "█".repeat((fraction * BAR_WIDTH as f64).round() as usize)
}

pub fn category_wedges(session: &Session) -> error::Result<Vec<Wedge>> {
    let slices = session.summary().by_category;
    Ok(pie_wedges(&slices, &PieLayout::default())?)
}

fn write_svg(path: &str, svg: &str) -> Result<()> {
    std::fs::write(Path::new(path), svg).with_context(|| format!("Failed to write {}", path))?;
    println!("Wrote {}", path);
    Ok(())
}

fn pie(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let wedges = match category_wedges(session) {
        Ok(w) => w,
        Err(TrackerError::Chart(e)) => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(path) = sub.get_one::<String>("svg") {
        return write_svg(path, &render_pie_svg(&wedges, &PieLayout::default()));
    }
    let data: Vec<Vec<String>> = wedges
        .iter()
        .map(|w| {
            vec![
                format!("{} {}", w.category.icon, w.category.name),
                fmt_money(&w.amount),
                format!("{:.1}%", w.percent()),
                bar(w.sweep / 360.0),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", ""], data)
    );
    Ok(())
}

pub fn monthly_series(session: &Session, sub: &clap::ArgMatches) -> Result<MonthlySeries> {
    let months = sub
        .get_one::<u32>("months")
        .copied()
        .unwrap_or(session.settings().chart_months);
    let end = match sub.get_one::<String>("end") {
        Some(m) => parse_month(m)?,
        None => session.latest_date(chrono::Local::now().date_naive()),
    };
    Ok(MonthlySeries::from_transactions(
        session.transactions(),
        end,
        months,
    ))
}

fn bars(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_series(session, sub)?;
    if let Some(path) = sub.get_one::<String>("svg") {
        return write_svg(path, &render_bars_svg(&series));
    }
    let mut data = Vec::new();
    for (i, (inc_h, exp_h)) in series.heights().into_iter().enumerate() {
        data.push(vec![
            series.labels[i].clone(),
            fmt_money(&series.income[i]),
            bar(inc_h),
            fmt_money(&series.expenses[i]),
            bar(exp_h),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["Month", "Income", "", "Expenses", ""], data)
    );
    Ok(())
}
