use tracing::{debug, trace};

use crate::models::{Food, Selection};
use crate::planner::ranking::rank_menu;

/// Spend a calorie budget with one greedy pass.
///
/// Foods are ranked by `key` (highest first, ties in menu order) and
/// scanned once. A food is taken if it still fits under `max_calories`,
/// otherwise it is skipped for good. Each food is taken at most once;
/// `max_servings` is ignored.
pub fn greedy_select<F>(menu: &[Food], max_calories: f64, key: F) -> Selection<'_>
where
    F: Fn(&Food) -> f64,
{
    let mut selection = Selection::new();

    for food in rank_menu(menu, key) {
        if selection.totals.calories + food.calories <= max_calories {
            selection.push(food);
            debug!(
                food = %food.name,
                used_calories = selection.totals.calories,
                used_value = selection.totals.value,
                "picked"
            );
        } else {
            trace!(food = %food.name, calories = food.calories, "does not fit");
        }
    }

    debug!(
        picks = selection.servings(),
        used_calories = selection.totals.calories,
        used_value = selection.totals.value,
        max_calories,
        "single-pick run finished"
    );

    selection
}
