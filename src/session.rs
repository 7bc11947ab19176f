// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! State for one run: the store, the budget, and the settings it started
//! from. Owned by the binary's root and handed to commands by `&mut`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{Result, TrackerError};
use crate::form::TransactionForm;
use crate::models::{Transaction, TransactionId, sample_transactions};
use crate::store::{Action, ClockIds, IdSource, Outcome, TransactionStore};
use crate::summary::Summary;
use crate::view::{Filter, filtered_view};

pub struct Session {
    store: TransactionStore,
    budget: Decimal,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_ids(settings, Box::new(ClockIds::new()))
    }

    pub fn with_ids(settings: Settings, ids: Box<dyn IdSource>) -> Self {
        let seed = if settings.load_sample {
            sample_transactions()
        } else {
            Vec::new()
        };
        info!(transactions = seed.len(), budget = %settings.budget, "session started");
        Self {
            store: TransactionStore::with_transactions(ids, seed),
            budget: settings.budget,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.get(id)
    }

    pub fn budget(&self) -> Decimal {
        self.budget
    }

    pub fn set_budget(&mut self, budget: Decimal) {
        debug!(%budget, "budget set");
        self.budget = budget;
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        self.store.dispatch(action)
    }

    /// Validate `form` and add it as a new transaction.
    pub fn submit_new(&mut self, form: &TransactionForm) -> Result<TransactionId> {
        let new = form.validate()?;
        match self.dispatch(Action::Add(new)) {
            Outcome::Added(id) => Ok(id),
            other => unreachable!("add always appends, got {other:?}"),
        }
    }

    /// Validate `form` and replace transaction `id` with it, keeping the id.
    pub fn submit_edit(&mut self, id: TransactionId, form: &TransactionForm) -> Result<()> {
        if self.get(id).is_none() {
            return Err(TrackerError::UnknownTransaction(id));
        }
        let tx = form.validate()?.with_id(id);
        self.dispatch(Action::Update(tx));
        Ok(())
    }

    pub fn delete(&mut self, id: TransactionId) -> Outcome {
        self.dispatch(Action::Delete(id))
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(self.transactions(), self.budget)
    }

    pub fn view(&self, filter: &Filter) -> Vec<&Transaction> {
        filtered_view(self.transactions(), filter)
    }

    /// Most recent transaction date, used as the default end of the monthly
    /// chart; falls back to `today` for an empty store.
    pub fn latest_date(&self, today: NaiveDate) -> NaiveDate {
        self.transactions()
            .iter()
            .map(|t| t.date)
            .max()
            .unwrap_or(today)
    }
}
