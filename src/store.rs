// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction store: an ordered list of records mutated only by
//! dispatching [`Action`]s.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::models::{NewTransaction, Transaction, TransactionId};

/// Produces ids for newly added transactions.
///
/// `floor` is the largest id currently in the store; implementations must
/// return something strictly greater than both `floor` and any id they
/// handed out before.
pub trait IdSource {
    fn next_id(&mut self, floor: Option<TransactionId>) -> TransactionId;
}

/// Wall-clock milliseconds, bumped past the previous id when two adds land
/// in the same tick.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: Option<i64>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self, floor: Option<TransactionId>) -> TransactionId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        let mut id = now;
        if let Some(last) = self.last {
            id = id.max(last + 1);
        }
        if let Some(TransactionId(f)) = floor {
            id = id.max(f + 1);
        }
        self.last = Some(id);
        TransactionId(id)
    }
}

/// Plain counter, for scripts and tests that want predictable ids.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: i64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, floor: Option<TransactionId>) -> TransactionId {
        let base = floor.map_or(self.last, |TransactionId(f)| f.max(self.last));
        self.last = base + 1;
        TransactionId(self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(NewTransaction),
    Update(Transaction),
    Delete(TransactionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(TransactionId),
    Updated(TransactionId),
    Deleted(TransactionId),
    Unchanged,
}

pub struct TransactionStore {
    transactions: Vec<Transaction>,
    ids: Box<dyn IdSource>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(Box::new(ClockIds::new()))
    }
}

impl TransactionStore {
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        Self {
            transactions: Vec::new(),
            ids,
        }
    }

    /// Start from existing records, e.g. the sample data. Ids are taken as-is.
    pub fn with_transactions(ids: Box<dyn IdSource>, transactions: Vec<Transaction>) -> Self {
        Self { transactions, ids }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::Add(new) => {
                let floor = self.transactions.iter().map(|t| t.id).max();
                let id = self.ids.next_id(floor);
                self.transactions.push(new.with_id(id));
                Outcome::Added(id)
            }
            Action::Update(tx) => {
                let id = tx.id;
                match self.transactions.iter_mut().find(|t| t.id == id) {
                    Some(slot) => {
                        *slot = tx;
                        Outcome::Updated(id)
                    }
                    None => Outcome::Unchanged,
                }
            }
            Action::Delete(id) => {
                let before = self.transactions.len();
                self.transactions.retain(|t| t.id != id);
                if self.transactions.len() < before {
                    Outcome::Deleted(id)
                } else {
                    Outcome::Unchanged
                }
            }
        };
        debug!(?outcome, count = self.transactions.len(), "store dispatch");
        outcome
    }
}
