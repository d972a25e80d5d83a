use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::models::{Food, GoalSelection, Selection};
use crate::planner::ranking::rank_positions;

/// Target and optional ceilings for a goal-first run.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalConstraints {
    /// Summed value the run tries to reach.
    pub target_value: f64,
    /// Stop taking foods that would push calories past this.
    pub max_calories: Option<f64>,
    /// Stop once this many servings have been taken.
    pub max_servings: Option<u32>,
}

impl GoalConstraints {
    /// Unconstrained run toward `target_value`.
    pub fn new(target_value: f64) -> Self {
        Self {
            target_value,
            max_calories: None,
            max_servings: None,
        }
    }

    pub fn with_max_calories(mut self, max_calories: f64) -> Self {
        self.max_calories = Some(max_calories);
        self
    }

    pub fn with_max_servings(mut self, max_servings: u32) -> Self {
        self.max_servings = Some(max_servings);
        self
    }

    fn servings_allow(&self, servings: usize) -> bool {
        self.max_servings.is_none_or(|max| servings < max as usize)
    }

    fn calories_allow(&self, used_calories: f64, food: &Food) -> bool {
        self.max_calories
            .is_none_or(|max| used_calories + food.calories <= max)
    }
}

/// Pick servings until the target value is reached or nothing more fits.
///
/// Foods are ranked once by `key`. Every scan starts from the top-ranked
/// food and takes the first one that is under its `max_servings` cap and
/// fits the servings and calorie ceilings; after each pick the scan starts
/// over from the top, so the best eligible food is reused before any
/// lower-ranked one is tried. The run ends as soon as the target is met, or
/// after a full scan that takes nothing.
///
/// Repeat caps are tracked per menu position, so two entries sharing a name
/// each get their own cap. `counts` in the result sums servings by name.
pub fn goal_first_select<'a, F>(
    menu: &'a [Food],
    constraints: &GoalConstraints,
    key: F,
) -> GoalSelection<'a>
where
    F: Fn(&Food) -> f64,
{
    let target = constraints.target_value;

    // Positions rather than references so caps stay per entry.
    let order = rank_positions(menu, key);

    let mut used = vec![0u32; menu.len()];
    let mut selection = Selection::new();

    let mut made_progress = true;
    while selection.totals.value < target && made_progress {
        made_progress = false;

        for &idx in &order {
            if selection.totals.value >= target {
                break;
            }

            let food = &menu[idx];

            if used[idx] >= food.max_servings {
                continue;
            }

            if !constraints.servings_allow(selection.servings()) {
                trace!(food = %food.name, "servings ceiling reached");
                continue;
            }

            if !constraints.calories_allow(selection.totals.calories, food) {
                trace!(food = %food.name, calories = food.calories, "does not fit");
                continue;
            }

            used[idx] += 1;
            selection.push(food);
            made_progress = true;

            debug!(
                food = %food.name,
                serving = used[idx],
                used_calories = selection.totals.calories,
                used_value = selection.totals.value,
                "picked"
            );

            // Restart from the best food again
            break;
        }
    }

    let reached = selection.totals.value >= target;

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for (food, &n) in menu.iter().zip(&used) {
        if n > 0 {
            *counts.entry(food.name.clone()).or_insert(0) += n;
        }
    }

    debug!(
        servings = selection.servings(),
        used_calories = selection.totals.calories,
        used_value = selection.totals.value,
        target,
        reached,
        "goal-first run finished"
    );

    GoalSelection {
        selection,
        target_value: target,
        reached,
        counts,
    }
}
