// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod budgets;
pub mod reports;
pub mod categories;
pub mod charts;
pub mod exporter;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::cli;
use crate::session::Session;
use crate::utils::split_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle(session: &mut Session, matches: &clap::ArgMatches) -> Result<Flow> {
    match matches.subcommand() {
        Some(("tx", sub)) => transactions::handle(session, sub)?,
        Some(("summary", sub)) => reports::handle(session, sub)?,
        Some(("budget", sub)) => budgets::handle(session, sub)?,
        Some(("category", sub)) => categories::handle(sub)?,
        Some(("chart", sub)) => charts::handle(session, sub)?,
        Some(("export", sub)) => exporter::handle(session, sub)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        _ => {}
    }
    Ok(Flow::Continue)
}

/// Parse and run one shell line. Blank lines and `#` comments do nothing.
/// Help output and usage mistakes are printed rather than returned.
pub fn run_line(session: &mut Session, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    let words = split_words(line)?;
    match cli::build_shell().try_get_matches_from(words) {
        Ok(matches) => handle(session, &matches),
        Err(e) => {
            e.print()?;
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    Ok(Flow::Continue)
                }
                _ => Err(anyhow::anyhow!("Could not parse '{}'", line)),
            }
        }
    }
}

/// Read lines from `input` until end of input or `quit`. A failing line is
/// reported once on `err` and the loop keeps going.
pub fn run_shell<R: BufRead, O: Write, E: Write>(
    session: &mut Session,
    input: R,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    writeln!(out, "ExpenseTrackr: type 'help' for commands, 'quit' to leave.")?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match run_line(session, &line?) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(err, "error: {e:#}")?,
        }
    }
    Ok(())
}
