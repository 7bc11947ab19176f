// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Raw user input for adding or editing a transaction. The store trusts
//! whatever it is given, so everything is checked here first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, DEFAULT_CATEGORY, NewTransaction, Transaction, TxKind};
use crate::utils::parse_date;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("An amount is required")]
    MissingAmount,

    #[error("A description is required")]
    MissingDescription,

    #[error("Invalid amount '{0}', expected a positive number")]
    InvalidAmount(String),

    #[error("Unknown expense category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: TxKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionForm {
    /// Blank form: an expense in the default category, dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TxKind::Expense,
            amount: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            date: today.to_string(),
        }
    }

    /// Form prefilled from an existing record, for editing.
    pub fn from_transaction(t: &Transaction) -> Self {
        Self {
            kind: t.kind,
            amount: t.amount.to_string(),
            category: t.category.clone(),
            description: t.description.clone(),
            date: t.date.to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewTransaction, FormError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        let amount: Decimal = amount
            .parse()
            .map_err(|_| FormError::InvalidAmount(amount.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(FormError::InvalidAmount(self.amount.trim().to_string()));
        }
        let category = self.category.trim();
        if self.kind == TxKind::Expense && Category::find(category).is_none() {
            return Err(FormError::UnknownCategory(category.to_string()));
        }
        let date = parse_date(self.date.trim())
            .map_err(|_| FormError::InvalidDate(self.date.trim().to_string()))?;

        Ok(NewTransaction {
            kind: self.kind,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
        })
    }
}
