use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::models::{GoalSelection, Selection};
use crate::planner::constants::LOG_TIMESTAMP_FORMAT;

const GREEDY_HEADER: [&str; 6] = [
    "Date Created",
    "Strategy",
    "Food Items",
    "Item Count",
    "Total Calories",
    "Total Value",
];

const GOAL_HEADER: [&str; 8] = [
    "Date Created",
    "Strategy",
    "Target Value",
    "Reached Target",
    "Food Items",
    "Total Servings",
    "Total Calories",
    "Total Value",
];

/// Current local time in the log's "Date Created" format.
pub fn now_timestamp() -> String {
    Local::now().format(LOG_TIMESTAMP_FORMAT).to_string()
}

/// Append one single-pick run to the CSV log at `path`.
///
/// The header row is written first when the file is missing or empty.
pub fn append_greedy_result(
    path: &Path,
    timestamp: &str,
    strategy: &str,
    selection: &Selection<'_>,
) -> Result<()> {
    append_row(
        path,
        &GREEDY_HEADER,
        [
            timestamp.to_string(),
            strategy.to_string(),
            selection.joined_names(),
            selection.servings().to_string(),
            selection.totals.calories.to_string(),
            selection.totals.value.to_string(),
        ],
    )
}

/// Append one goal-first run to the CSV log at `path`.
pub fn append_goal_result(
    path: &Path,
    timestamp: &str,
    strategy: &str,
    result: &GoalSelection<'_>,
) -> Result<()> {
    append_row(
        path,
        &GOAL_HEADER,
        [
            timestamp.to_string(),
            strategy.to_string(),
            result.target_value.to_string(),
            result.reached.to_string(),
            result.selection.joined_names(),
            result.servings().to_string(),
            result.selection.totals.calories.to_string(),
            result.selection.totals.value.to_string(),
        ],
    )
}

fn append_row<const N: usize>(path: &Path, header: &[&str; N], row: [String; N]) -> Result<()> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        wtr.write_record(header)?;
    }
    wtr.write_record(&row)?;

    wtr.flush()?;
    Ok(())
}
