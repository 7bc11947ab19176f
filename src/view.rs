// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TxKind),
}

impl TypeFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => t.kind == *kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TxKind>().map(Self::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => t.category == *name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub kind: TypeFilter,
    pub category: CategoryFilter,
}

impl Filter {
    pub fn matches(&self, t: &Transaction) -> bool {
        self.kind.matches(t) && self.category.matches(t)
    }
}

/// Transactions passing `filter`, newest first. Records sharing a date keep
/// their store order.
pub fn filtered_view<'a>(txs: &'a [Transaction], filter: &Filter) -> Vec<&'a Transaction> {
    let mut out: Vec<&Transaction> = txs.iter().filter(|t| filter.matches(t)).collect();
    out.sort_by_key(|t| Reverse(t.date));
    out
}
