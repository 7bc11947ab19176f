// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub static CATEGORIES: [Category; 8] = [
    Category { name: "Food & Dining", color: "#ef4444", icon: "🍔" },
    Category { name: "Transportation", color: "#3b82f6", icon: "🚗" },
    Category { name: "Shopping", color: "#8b5cf6", icon: "🛍️" },
    Category { name: "Entertainment", color: "#ec4899", icon: "🎬" },
    Category { name: "Bills & Utilities", color: "#f59e0b", icon: "💡" },
    Category { name: "Healthcare", color: "#10b981", icon: "⚕️" },
    Category { name: "Education", color: "#06b6d4", icon: "📚" },
    Category { name: "Other", color: "#6b7280", icon: "📦" },
];

/// Category new transactions start with.
pub const DEFAULT_CATEGORY: &str = "Food & Dining";

impl Category {
    /// Find a category by exact name.
    pub fn find(name: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type '{}' (use income|expense)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transaction before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal, // magnitude, sign comes from `kind`
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => -self.amount,
        }
    }

    /// Glyph shown next to the transaction; income labels fall back to a coin.
    pub fn icon(&self) -> &'static str {
        Category::find(&self.category).map_or("💰", |c| c.icon)
    }
}

fn seed(id: i64, kind: TxKind, amount: Decimal, category: &str, description: &str, date: (i32, u32, u32)) -> Transaction {
    Transaction {
        id: TransactionId(id),
        kind,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

/// Records a fresh session starts with.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        seed(1, TxKind::Expense, Decimal::new(4550, 2), "Food & Dining", "Lunch at cafe", (2025, 10, 18)),
        seed(2, TxKind::Income, Decimal::new(3000, 0), "Salary", "Monthly salary", (2025, 10, 1)),
        seed(3, TxKind::Expense, Decimal::new(120, 0), "Transportation", "Gas refill", (2025, 10, 17)),
        seed(4, TxKind::Expense, Decimal::new(85, 0), "Shopping", "Groceries", (2025, 10, 16)),
        seed(5, TxKind::Expense, Decimal::new(200, 0), "Bills & Utilities", "Electricity bill", (2025, 10, 15)),
    ]
}
