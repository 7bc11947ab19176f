// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use expensetrackr::config::Settings;
use expensetrackr::models::{NewTransaction, Transaction, TransactionId, TxKind};
use expensetrackr::session::Session;
use expensetrackr::store::SequentialIds;
use rust_decimal::Decimal;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn new_tx(kind: TxKind, amount: Decimal, category: &str, description: &str, on: &str) -> NewTransaction {
    NewTransaction {
        kind,
        amount,
        category: category.into(),
        description: description.into(),
        date: date(on),
    }
}

pub fn tx(id: i64, kind: TxKind, amount: Decimal, category: &str, on: &str) -> Transaction {
    new_tx(kind, amount, category, "", on).with_id(TransactionId(id))
}

/// Expense 45.50 food, income 3000 salary, expense 120 transport.
pub fn scenario() -> Vec<Transaction> {
    vec![
        tx(1, TxKind::Expense, Decimal::new(4550, 2), "Food & Dining", "2025-10-18"),
        tx(2, TxKind::Income, Decimal::new(3000, 0), "Salary", "2025-10-01"),
        tx(3, TxKind::Expense, Decimal::new(120, 0), "Transportation", "2025-10-17"),
    ]
}

/// Session with no sample data and ids 1, 2, 3...
pub fn empty_session() -> Session {
    let settings = Settings {
        load_sample: false,
        ..Settings::default()
    };
    Session::with_ids(settings, Box::new(SequentialIds::new()))
}
