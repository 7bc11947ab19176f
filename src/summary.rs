// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CATEGORIES, Category, Transaction, TxKind};

fn sum_of(txs: &[Transaction], kind: TxKind) -> Decimal {
    txs.iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn total_income(txs: &[Transaction]) -> Decimal {
    sum_of(txs, TxKind::Income)
}

pub fn total_expenses(txs: &[Transaction]) -> Decimal {
    sum_of(txs, TxKind::Expense)
}

pub fn balance(txs: &[Transaction]) -> Decimal {
    total_income(txs) - total_expenses(txs)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: &'static Category,
    pub amount: Decimal,
}

/// Expense sums per known category, in category table order. Categories
/// with nothing spent are left out, as are expenses filed under a name that
/// is not in the table.
pub fn expenses_by_category(txs: &[Transaction]) -> Vec<CategoryTotal> {
    CATEGORIES
        .iter()
        .map(|cat| CategoryTotal {
            category: cat,
            amount: txs
                .iter()
                .filter(|t| t.is_expense() && t.category == cat.name)
                .map(|t| t.amount)
                .sum(),
        })
        .filter(|c| c.amount > Decimal::ZERO)
        .collect()
}

/// Share of the budget already spent, in percent. `None` when no budget is set.
pub fn budget_percentage(total_expenses: Decimal, budget: Decimal) -> Option<Decimal> {
    if budget.is_zero() {
        return None;
    }
    total_expenses
        .checked_div(budget)
        .map(|r| r * Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    Critical,
    Unset,
}

impl BudgetStatus {
    pub fn from_percentage(pct: Option<Decimal>) -> Self {
        match pct {
            None => Self::Unset,
            Some(p) if p > Decimal::from(90) => Self::Critical,
            Some(p) if p > Decimal::from(70) => Self::Warning,
            Some(_) => Self::OnTrack,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "on track",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Unset => "no budget",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub budget: Decimal,
    pub budget_percentage: Option<Decimal>,
    pub budget_status: BudgetStatus,
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    pub fn compute(txs: &[Transaction], budget: Decimal) -> Self {
        let total_income = total_income(txs);
        let total_expenses = total_expenses(txs);
        let pct = budget_percentage(total_expenses, budget);
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            budget,
            budget_percentage: pct,
            budget_status: BudgetStatus::from_percentage(pct),
            by_category: expenses_by_category(txs),
        }
    }

    /// Budget usage clamped to `0..=100`, for progress bars.
    pub fn progress_percent(&self) -> Decimal {
        self.budget_percentage
            .map_or(Decimal::ZERO, |p| p.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }
}
