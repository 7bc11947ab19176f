// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use std::collections::HashSet;

use common::{new_tx, scenario};
use expensetrackr::models::{TransactionId, TxKind};
use expensetrackr::store::{Action, ClockIds, Outcome, SequentialIds, TransactionStore};
use rust_decimal_macros::dec;

#[test]
fn rapid_adds_get_distinct_ids() {
    let mut store = TransactionStore::new(Box::new(ClockIds::new()));
    for i in 0..200 {
        let outcome = store.dispatch(Action::Add(new_tx(
            TxKind::Expense,
            dec!(1.25),
            "Other",
            &format!("item {i}"),
            "2025-10-01",
        )));
        assert!(matches!(outcome, Outcome::Added(_)));
    }
    assert_eq!(store.len(), 200);
    let ids: HashSet<_> = store.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn add_after_seeded_records_does_not_collide() {
    let mut store = TransactionStore::with_transactions(Box::new(SequentialIds::new()), scenario());
    let outcome = store.dispatch(Action::Add(new_tx(
        TxKind::Income,
        dec!(50),
        "Gift",
        "Birthday",
        "2025-10-05",
    )));
    assert_eq!(outcome, Outcome::Added(TransactionId(4)));
    assert_eq!(store.transactions().last().unwrap().description, "Birthday");
}

#[test]
fn update_replaces_only_the_matching_record() {
    let mut store = TransactionStore::with_transactions(Box::new(SequentialIds::new()), scenario());
    let before = store.transactions().to_vec();

    let mut edited = before[2].clone();
    edited.amount = dec!(99.99);
    edited.description = "Train pass".into();
    assert_eq!(
        store.dispatch(Action::Update(edited.clone())),
        Outcome::Updated(TransactionId(3))
    );

    let after = store.transactions();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], edited);
    assert_eq!(after[2].id, TransactionId(3));
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let mut store = TransactionStore::with_transactions(Box::new(SequentialIds::new()), scenario());
    let mut ghost = store.transactions()[0].clone();
    ghost.id = TransactionId(42);
    assert_eq!(store.dispatch(Action::Update(ghost)), Outcome::Unchanged);
    assert_eq!(store.transactions(), scenario().as_slice());
}

#[test]
fn delete_twice_is_idempotent() {
    let mut store = TransactionStore::with_transactions(Box::new(SequentialIds::new()), scenario());
    assert_eq!(
        store.dispatch(Action::Delete(TransactionId(2))),
        Outcome::Deleted(TransactionId(2))
    );
    let once = store.transactions().to_vec();
    assert_eq!(store.dispatch(Action::Delete(TransactionId(2))), Outcome::Unchanged);
    assert_eq!(store.transactions(), once.as_slice());
    assert_eq!(store.len(), 2);
}
