// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod models;
pub mod session;
pub mod store;
pub mod summary;
pub mod utils;
pub mod view;
