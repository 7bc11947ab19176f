// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{date, empty_session, scenario, tx};
use expensetrackr::charts::{
    ChartError, MonthlySeries, PieLayout, bar_heights, pie_wedges, render_bars_svg,
    render_pie_svg,
};
use expensetrackr::cli;
use expensetrackr::commands::{self, Flow, run_line};
use expensetrackr::config::Settings;
use expensetrackr::error::TrackerError;
use expensetrackr::models::{Category, TxKind};
use expensetrackr::session::Session;
use expensetrackr::summary::{CategoryTotal, expenses_by_category};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn slice(name: &str, amount: Decimal) -> CategoryTotal {
    CategoryTotal {
        category: Category::find(name).unwrap(),
        amount,
    }
}

#[test]
fn food_wedge_starts_at_twelve_oclock() {
    let wedges = pie_wedges(&expenses_by_category(&scenario()), &PieLayout::default()).unwrap();
    assert_eq!(wedges.len(), 2);

    let food = &wedges[0];
    assert_eq!(food.category.name, "Food & Dining");
    assert!(close(food.start_angle, -90.0));
    assert!(close(food.sweep, 45.50 / 165.50 * 360.0));
    assert!((food.sweep - 98.97).abs() < 0.01);
    assert!(close(food.start.x, 100.0));
    assert!(close(food.start.y, 20.0));
    assert!(!food.large_arc);

    let transport = &wedges[1];
    assert!(close(transport.start_angle, -90.0 + food.sweep));
    assert!(close(food.sweep + transport.sweep, 360.0));
    assert!(transport.large_arc);
    assert!(close(transport.end.x, 100.0));
    assert!(close(transport.end.y, 20.0));
}

#[test]
fn wedge_path_is_closed_arc_from_centre() {
    let wedges = pie_wedges(
        &[slice("Other", dec!(10)), slice("Shopping", dec!(30))],
        &PieLayout::default(),
    )
    .unwrap();
    let path = &wedges[0].path;
    assert!(path.starts_with("M 100 100 L 100 20 A 80 80 0 0 1 "));
    assert!(path.ends_with(" Z"));
    assert!(wedges[1].path.contains(" A 80 80 0 1 1 "));
}

#[test]
fn lone_wedge_is_drawn_as_two_half_arcs() {
    let layout = PieLayout::default();
    let wedges = pie_wedges(&[slice("Other", dec!(10))], &layout).unwrap();
    assert_eq!(wedges.len(), 1);
    assert!(close(wedges[0].sweep, 360.0));

    let path = &wedges[0].path;
    assert!(path.starts_with("M 100 20 A 80 80 0 1 1 100 180 A 80 80 0 1 1 100 20"));
    assert!(path.ends_with(" Z"));
    assert!(!path.contains(" L "));

    let svg = render_pie_svg(&wedges, &layout);
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains(r##"fill="#6b7280""##));
    assert!(svg.contains("$10"));
}

#[test]
fn empty_pie_is_rejected() {
    assert_eq!(
        pie_wedges(&[], &PieLayout::default()).unwrap_err(),
        ChartError::EmptyData
    );
}

#[test]
fn pie_svg_has_one_path_per_wedge() {
    let layout = PieLayout::default();
    let wedges = pie_wedges(&expenses_by_category(&scenario()), &layout).unwrap();
    let svg = render_pie_svg(&wedges, &layout);
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(svg.contains(r##"fill="#ef4444""##));
    assert!(svg.contains("$166"));
}

#[test]
fn bars_scale_to_largest_value_across_both_series() {
    let heights = bar_heights(&[3000.0, 1500.0], &[600.0, 4000.0]);
    assert_eq!(heights, vec![(0.75, 0.15), (0.375, 1.0)]);
}

#[test]
fn all_zero_bars_have_zero_height() {
    let heights = bar_heights(&[0.0, 0.0], &[0.0, 0.0]);
    assert_eq!(heights, vec![(0.0, 0.0), (0.0, 0.0)]);
}

#[test]
fn monthly_series_spans_calendar_months() {
    let txs = vec![
        tx(1, TxKind::Income, dec!(3000), "Salary", "2025-10-01"),
        tx(2, TxKind::Expense, dec!(120), "Transportation", "2025-10-17"),
        tx(3, TxKind::Expense, dec!(80), "Shopping", "2025-08-30"),
        tx(4, TxKind::Expense, dec!(55), "Other", "2025-01-03"),
        tx(5, TxKind::Income, dec!(900), "Bonus", "2024-12-20"),
    ];
    let series = MonthlySeries::from_transactions(&txs, date("2025-10-19"), 3);
    assert_eq!(series.labels, vec!["Aug", "Sep", "Oct"]);
    assert_eq!(series.income, vec![dec!(0), dec!(0), dec!(3000)]);
    assert_eq!(series.expenses, vec![dec!(80), dec!(0), dec!(120)]);

    let across_year = MonthlySeries::from_transactions(&txs, date("2025-01-31"), 2);
    assert_eq!(across_year.labels, vec!["Dec", "Jan"]);
    assert_eq!(across_year.income, vec![dec!(900), dec!(0)]);
    assert_eq!(across_year.expenses, vec![dec!(0), dec!(55)]);
}

#[test]
fn series_heights_and_svg_follow_the_tallest_month() {
    let txs = vec![
        tx(1, TxKind::Income, dec!(400), "Salary", "2025-09-01"),
        tx(2, TxKind::Expense, dec!(100), "Other", "2025-10-02"),
    ];
    let series = MonthlySeries::from_transactions(&txs, date("2025-10-31"), 2);
    assert_eq!(series.heights(), vec![(1.0, 0.0), (0.0, 0.25)]);

    let svg = render_bars_svg(&series);
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains(r#"y="0" width="24" height="200""#));
    assert!(svg.contains(r#"y="150" width="24" height="50""#));
    assert!(svg.contains(">Sep</text>"));
}

fn bars_args(args: &[&str]) -> clap::ArgMatches {
    let mut line = vec!["chart", "bars"];
    line.extend_from_slice(args);
    let matches = cli::build_shell().get_matches_from(line);
    matches
        .subcommand_matches("chart")
        .and_then(|m| m.subcommand_matches("bars"))
        .unwrap()
        .clone()
}

#[test]
fn bars_default_to_latest_transaction_and_configured_months() {
    let settings = Settings {
        chart_months: 4,
        ..Settings::default()
    };
    let session = Session::new(settings);
    let series = commands::charts::monthly_series(&session, &bars_args(&[])).unwrap();
    assert_eq!(series.labels, vec!["Jul", "Aug", "Sep", "Oct"]);
    assert_eq!(series.income[3], dec!(3000));
    assert_eq!(series.expenses[3], dec!(450.50));
    assert!(series.expenses[..3].iter().all(|e| e.is_zero()));
}

#[test]
fn bars_honour_end_month_and_months_flags() {
    let session = Session::new(Settings::default());
    let series =
        commands::charts::monthly_series(&session, &bars_args(&["--months", "2", "--end", "2025-11"]))
            .unwrap();
    assert_eq!(series.labels, vec!["Oct", "Nov"]);
    assert_eq!(series.expenses, vec![dec!(450.50), dec!(0)]);

    assert!(commands::charts::monthly_series(&session, &bars_args(&["--end", "October"])).is_err());
}

#[test]
fn bars_command_writes_svg() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bars.svg");
    let out_str = out_path.to_string_lossy().to_string();

    let mut session = Session::new(Settings::default());
    let matches = cli::build_shell().get_matches_from([
        "chart", "bars", "--months", "3", "--end", "2025-10", "--svg", &out_str,
    ]);
    assert_eq!(commands::handle(&mut session, &matches).unwrap(), Flow::Continue);

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<rect").count(), 6);
    assert!(svg.contains(">Aug</text>"));
    assert!(svg.contains(">Oct</text>"));
}

#[test]
fn pie_command_on_empty_session_reports_and_continues() {
    let mut session = empty_session();
    assert!(matches!(
        commands::charts::category_wedges(&session),
        Err(TrackerError::Chart(ChartError::EmptyData))
    ));
    assert_eq!(run_line(&mut session, "chart pie").unwrap(), Flow::Continue);
    assert_eq!(run_line(&mut session, "chart bars").unwrap(), Flow::Continue);
}

#[test]
fn pie_command_writes_svg_for_single_category() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("pie.svg");
    let out_str = out_path.to_string_lossy().to_string();

    let mut session = empty_session();
    run_line(
        &mut session,
        "tx add --type expense --amount 25 --category Healthcare --description Pharmacy --date 2025-10-10",
    )
    .unwrap();
    let matches = cli::build_shell().get_matches_from(["chart", "pie", "--svg", &out_str]);
    commands::handle(&mut session, &matches).unwrap();

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("A 80 80 0 1 1 100 180"));
    assert!(svg.contains(r##"fill="#10b981""##));
    assert!(svg.contains("$25"));
}
