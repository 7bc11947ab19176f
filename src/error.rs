// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::charts::ChartError;
use crate::form::FormError;
use crate::models::TransactionId;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Transaction {0} not found")]
    UnknownTransaction(TransactionId),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Settings error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
