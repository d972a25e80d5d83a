/// Repeat cap given to foods whose menu does not specify one.
pub const DEFAULT_MAX_SERVINGS: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Driver defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie budget for single-pick runs when none is given.
pub const DEFAULT_MAX_CALORIES: f64 = 750.0;

/// Default log for single-pick runs.
pub const DEFAULT_GREEDY_LOG: &str = "greedy_results.csv";

/// Default log for goal-first runs.
pub const DEFAULT_GOAL_LOG: &str = "goal_results.csv";

/// Strategy label prefix used when logging goal-first runs.
pub const GOAL_FIRST_LABEL: &str = "goal-first";

/// Timestamp format for the "Date Created" log column.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
