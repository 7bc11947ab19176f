// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::export::{ExportFormat, export_to_path};
use crate::session::Session;
use anyhow::{Result, anyhow};

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map_or("csv", String::as_str)
        .parse::<ExportFormat>()
        .map_err(|e| anyhow!(e))?;
    let out = sub
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| session.settings().export_file.clone());

    export_to_path(Path::new(&out), fmt, session.transactions())?;
    println!(
        "Exported {} transactions to {}",
        session.transactions().len(),
        out
    );
    Ok(())
}
