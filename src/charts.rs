// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pie and bar chart geometry, plus SVG rendering of both.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Category, Transaction, TxKind};
use crate::summary::CategoryTotal;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Nothing to chart: no expenses recorded")]
    EmptyData,
}

/// Angle of the first wedge edge: 12 o'clock in screen coordinates.
pub const START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            radius: 80.0,
        }
    }
}

impl PieLayout {
    /// Point on the circle at `degrees`, measured clockwise from 3 o'clock.
    pub fn project(&self, degrees: f64) -> Point {
        let rad = degrees.to_radians();
        Point {
            x: self.cx + self.radius * rad.cos(),
            y: self.cy + self.radius * rad.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Wedge {
    pub category: &'static Category,
    pub amount: Decimal,
    pub start_angle: f64,
    pub sweep: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
    pub path: String,
}

impl Wedge {
    pub fn percent(&self) -> f64 {
        self.sweep / 360.0 * 100.0
    }
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// A lone slice covers the whole disc. An arc whose endpoints coincide is
/// dropped by SVG renderers, so the circle is drawn as two half arcs.
fn full_circle_path(layout: &PieLayout, angle: f64) -> String {
    let start = layout.project(angle);
    let half = layout.project(angle + 180.0);
    format!(
        "M {sx} {sy} A {r} {r} 0 1 1 {hx} {hy} A {r} {r} 0 1 1 {sx} {sy} Z",
        sx = start.x,
        sy = start.y,
        hx = half.x,
        hy = half.y,
        r = layout.radius,
    )
}

/// Lay out one wedge per slice, clockwise from 12 o'clock.
pub fn pie_wedges(slices: &[CategoryTotal], layout: &PieLayout) -> Result<Vec<Wedge>, ChartError> {
    let total: Decimal = slices.iter().map(|s| s.amount).sum();
    if total <= Decimal::ZERO {
        return Err(ChartError::EmptyData);
    }
    let total = to_f64(total);

    let mut angle = START_ANGLE;
    let mut wedges = Vec::with_capacity(slices.len());
    for slice in slices {
        let sweep = to_f64(slice.amount) / total * 360.0;
        let start = layout.project(angle);
        let end = layout.project(angle + sweep);
        let large_arc = sweep > 180.0;
        let path = if sweep >= 360.0 {
            full_circle_path(layout, angle)
        } else {
            format!(
                "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
                layout.cx,
                layout.cy,
                start.x,
                start.y,
                layout.radius,
                layout.radius,
                u8::from(large_arc),
                end.x,
                end.y
            )
        };
        wedges.push(Wedge {
            category: slice.category,
            amount: slice.amount,
            start_angle: angle,
            sweep,
            start,
            end,
            large_arc,
            path,
        });
        angle += sweep;
    }
    Ok(wedges)
}

/// Height of each bar as a fraction of the tallest one across both series.
/// Everything is zero when the series hold nothing but zeros.
pub fn bar_heights(income: &[f64], expenses: &[f64]) -> Vec<(f64, f64)> {
    let max_value = income
        .iter()
        .chain(expenses.iter())
        .copied()
        .fold(0.0_f64, f64::max);
    income
        .iter()
        .zip(expenses.iter())
        .map(|(&i, &e)| {
            if max_value > 0.0 {
                (i / max_value, e / max_value)
            } else {
                (0.0, 0.0)
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expenses: Vec<Decimal>,
}

fn shift_month(year: i32, month: u32, back: u32) -> (i32, u32) {
    let idx = year * 12 + month as i32 - 1 - back as i32;
    (idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1)
}

impl MonthlySeries {
    /// Income and expense totals for the `months` calendar months ending
    /// with the month containing `end`.
    pub fn from_transactions(txs: &[Transaction], end: NaiveDate, months: u32) -> Self {
        let mut series = Self {
            labels: Vec::new(),
            income: Vec::new(),
            expenses: Vec::new(),
        };
        for back in (0..months).rev() {
            let (y, m) = shift_month(end.year(), end.month(), back);
            let in_month = |t: &&Transaction| t.date.year() == y && t.date.month() == m;
            let sum = |kind: TxKind| -> Decimal {
                txs.iter()
                    .filter(in_month)
                    .filter(|t| t.kind == kind)
                    .map(|t| t.amount)
                    .sum()
            };
            let label = NaiveDate::from_ymd_opt(y, m, 1)
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default();
            series.labels.push(label);
            series.income.push(sum(TxKind::Income));
            series.expenses.push(sum(TxKind::Expense));
        }
        series
    }

    pub fn heights(&self) -> Vec<(f64, f64)> {
        let income: Vec<f64> = self.income.iter().copied().map(to_f64).collect();
        let expenses: Vec<f64> = self.expenses.iter().copied().map(to_f64).collect();
        bar_heights(&income, &expenses)
    }
}

pub fn render_pie_svg(wedges: &[Wedge], layout: &PieLayout) -> String {
    let total: Decimal = wedges.iter().map(|w| w.amount).sum();
    let size = layout.cx.max(layout.cy) * 2.0;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    svg.push('\n');
    for w in wedges {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="{}" stroke="white" stroke-width="2"/>"#,
            w.path, w.category.color
        );
    }
    let _ = writeln!(
        svg,
        r##"  <circle cx="{}" cy="{}" r="{}" fill="white"/>"##,
        layout.cx,
        layout.cy,
        layout.radius / 2.0
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" text-anchor="middle" fill="#374151">${}</text>"##,
        layout.cx,
        layout.cy + 5.0,
        total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    );
    svg.push_str("</svg>\n");
    svg
}

const BAR_AREA_HEIGHT: f64 = 200.0;
const BAR_SLOT_WIDTH: f64 = 60.0;

pub fn render_bars_svg(series: &MonthlySeries) -> String {
    let heights = series.heights();
    let width = BAR_SLOT_WIDTH * series.labels.len().max(1) as f64;
    let height = BAR_AREA_HEIGHT + 20.0;
    let bar_w = BAR_SLOT_WIDTH / 2.0 - 6.0;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    svg.push('\n');
    for (i, (label, (inc, exp))) in series.labels.iter().zip(heights).enumerate() {
        let x = i as f64 * BAR_SLOT_WIDTH + 4.0;
        for (offset, frac, color) in [(0.0, inc, "#22c55e"), (bar_w + 4.0, exp, "#ef4444")] {
            let h = frac * BAR_AREA_HEIGHT;
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                x + offset,
                BAR_AREA_HEIGHT - h,
                bar_w,
                h,
                color
            );
        }
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
            x + bar_w + 2.0,
            height - 4.0,
            label
        );
    }
    svg.push_str("</svg>\n");
    svg
}
