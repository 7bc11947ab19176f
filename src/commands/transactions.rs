// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::TransactionForm;
use crate::models::{TransactionId, TxKind};
use crate::session::Session;
use crate::store::Outcome;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::view::{CategoryFilter, Filter, TypeFilter};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("edit", sub)) => edit(session, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Overlay whatever fields were given on the command line onto `form`.
pub fn fill_form(mut form: TransactionForm, sub: &clap::ArgMatches) -> Result<TransactionForm> {
    if let Some(kind) = sub.get_one::<String>("type") {
        form.kind = kind.parse::<TxKind>().map_err(|e| anyhow!(e))?;
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        form.amount = amount.clone();
    }
    if let Some(category) = sub.get_one::<String>("category") {
        form.category = category.clone();
    }
    if let Some(description) = sub.get_one::<String>("description") {
        form.description = description.clone();
    }
    if let Some(date) = sub.get_one::<String>("date") {
        form.date = date.clone();
    }
    Ok(form)
}

fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let form = fill_form(TransactionForm::new(today), sub)?;
    let id = session
        .submit_new(&form)
        .context("Transaction not recorded")?;
    println!(
        "Recorded {} {} on {} as #{}",
        form.kind,
        form.amount.trim(),
        form.date.trim(),
        id
    );
    Ok(())
}

fn edit(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = TransactionId(*sub.get_one::<i64>("id").context("missing id")?);
    let existing = session
        .get(id)
        .with_context(|| format!("Transaction {} not found", id))?;
    let form = fill_form(TransactionForm::from_transaction(existing), sub)?;
    session
        .submit_edit(id, &form)
        .context("Transaction not updated")?;
    println!("Updated #{}", id);
    Ok(())
}

fn rm(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = TransactionId(*sub.get_one::<i64>("id").context("missing id")?);
    match session.delete(id) {
        Outcome::Deleted(_) => println!("Deleted #{}", id),
        _ => println!("No transaction #{}", id),
    }
    Ok(())
}

fn list(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                format!("{} {}", r.icon, r.category),
                r.description.clone(),
                r.amount.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Category", "Description", "Amount"], rows)
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub amount: String,
}

pub fn parse_filter(sub: &clap::ArgMatches) -> Result<Filter> {
    let kind = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TypeFilter>().map_err(|e| anyhow!(e))?,
        None => TypeFilter::All,
    };
    let category = sub
        .get_one::<String>("category")
        .map_or(CategoryFilter::All, |s| CategoryFilter::from(s.as_str()));
    Ok(Filter { kind, category })
}

pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = parse_filter(sub)?;
    let data = session
        .view(&filter)
        .into_iter()
        .map(|t| {
            let sign = if t.is_income() { "+" } else { "-" };
            TransactionRow {
                id: t.id.0,
                date: t.date.to_string(),
                kind: t.kind.to_string(),
                category: t.category.clone(),
                icon: t.icon().to_string(),
                description: t.description.clone(),
                amount: format!("{}{}", sign, fmt_money(&t.amount)),
            }
        })
        .collect();
    Ok(data)
}
