use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_MAX_SERVINGS;

fn default_max_servings() -> u32 {
    DEFAULT_MAX_SERVINGS
}

/// A selectable food: a value score, a calorie cost, and a repeat cap.
///
/// `value` is unit-agnostic (probiotic units in the demo menus). Extra
/// per-serving attributes such as protein or sugar live in `nutrients` and
/// are summed alongside value and calories when a food is picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Value")]
    pub value: f64,

    #[serde(rename = "Calories")]
    pub calories: f64,

    /// How many times the goal-first allocator may pick this food.
    /// The single-pick allocator ignores it.
    #[serde(rename = "MaxServings", default = "default_max_servings")]
    pub max_servings: u32,

    #[serde(rename = "Nutrients", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nutrients: BTreeMap<String, f64>,
}

impl Food {
    /// Food with the default repeat cap and no extra nutrients.
    pub fn new(name: impl Into<String>, value: f64, calories: f64) -> Self {
        Self {
            name: name.into(),
            value,
            calories,
            max_servings: DEFAULT_MAX_SERVINGS,
            nutrients: BTreeMap::new(),
        }
    }

    pub fn with_max_servings(mut self, max_servings: u32) -> Self {
        self.max_servings = max_servings;
        self
    }

    pub fn with_nutrient(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.nutrients.insert(name.into(), amount);
        self
    }

    /// Value per calorie. A zero-calorie food has infinite density.
    #[inline]
    pub fn density(&self) -> f64 {
        if self.calories == 0.0 {
            f64::INFINITY
        } else {
            self.value / self.calories
        }
    }

    /// Amount of a named nutrient per serving, 0 when absent.
    #[inline]
    pub fn nutrient(&self, name: &str) -> f64 {
        self.nutrients.get(name).copied().unwrap_or(0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: <value={}, calories={}, max_servings={}>",
            self.name, self.value, self.calories, self.max_servings
        )
    }
}
