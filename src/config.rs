// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::export::DEFAULT_EXPORT_FILE;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ExpenseTrackr", "expensetrackr"));

/// Longest span the monthly bar chart covers.
pub const MAX_CHART_MONTHS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub budget: Decimal,
    pub load_sample: bool,
    pub export_file: String,
    pub chart_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget: Decimal::from(2000),
            load_sample: true,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            chart_months: 6,
        }
    }
}

/// `settings.json` in the platform config dir, if one can be determined.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("settings.json"))
}

/// Read settings from `path`. A missing file means defaults; a file that
/// exists but does not parse is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)
        .map_err(|e| TrackerError::Config(format!("{}: {}", path.display(), e)))?;
    if !(1..=MAX_CHART_MONTHS).contains(&settings.chart_months) {
        return Err(TrackerError::Config(format!(
            "{}: chart_months must be between 1 and {}, got {}",
            path.display(),
            MAX_CHART_MONTHS,
            settings.chart_months
        )));
    }
    Ok(settings)
}

pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    match explicit.map(Path::to_path_buf).or_else(default_settings_path) {
        Some(path) => load_settings(&path),
        None => Ok(Settings::default()),
    }
}
