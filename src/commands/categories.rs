// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CATEGORIES;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let data: Vec<Vec<String>> = CATEGORIES
            .iter()
            .map(|c| vec![c.icon.to_string(), c.name.to_string(), c.color.to_string()])
            .collect();
        println!("{}", pretty_table(&["", "Category", "Color"], data));
    }
    Ok(())
}
