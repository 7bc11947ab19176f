// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use expensetrackr::commands::{self, Flow};
use expensetrackr::session::Session;
use expensetrackr::store::SequentialIds;
use expensetrackr::{cli, config, logging, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    let mut settings = config::load(matches.get_one::<String>("config").map(Path::new))?;
    if let Some(b) = matches.get_one::<String>("budget") {
        settings.budget = utils::parse_budget(b);
    }
    if matches.get_flag("empty") {
        settings.load_sample = false;
    }

    let mut session = if matches.get_flag("sequential-ids") {
        Session::with_ids(settings, Box::new(SequentialIds::new()))
    } else {
        Session::new(settings)
    };

    match matches.subcommand() {
        Some(("run", sub)) => {
            let script = sub.get_one::<String>("script").context("missing script")?;
            run_script(&mut session, Path::new(script))?;
        }
        Some(("demo", _)) => {
            for line in ["summary", "tx list", "chart pie", "chart bars"] {
                commands::run_line(&mut session, line)?;
            }
        }
        _ => {
            let stdin = io::stdin();
            commands::run_shell(&mut session, stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
        }
    }
    Ok(())
}

fn run_script(session: &mut Session, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    for (n, line) in content.lines().enumerate() {
        let flow = commands::run_line(session, line)
            .with_context(|| format!("{}:{}", path.display(), n + 1))?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
