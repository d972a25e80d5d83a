use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::Food;
use crate::planner::constants::DEFAULT_MAX_SERVINGS;

/// A menu described as parallel columns: index `i` of every column
/// describes food `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuColumns {
    pub names: Vec<String>,
    pub values: Vec<f64>,
    pub calories: Vec<f64>,

    /// Per-food repeat caps; every food gets [`DEFAULT_MAX_SERVINGS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_servings: Option<Vec<u32>>,

    /// Extra per-serving attributes (protein, sugar, fat, ...), one column each.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nutrients: BTreeMap<String, Vec<f64>>,
}

impl MenuColumns {
    pub fn new(names: &[&str], values: &[f64], calories: &[f64]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            values: values.to_vec(),
            calories: calories.to_vec(),
            max_servings: None,
            nutrients: BTreeMap::new(),
        }
    }

    pub fn with_max_servings(mut self, max_servings: &[u32]) -> Self {
        self.max_servings = Some(max_servings.to_vec());
        self
    }

    pub fn with_nutrient(mut self, name: &str, amounts: &[f64]) -> Self {
        self.nutrients.insert(name.to_string(), amounts.to_vec());
        self
    }

    fn check_len(&self, column: &str, found: usize) -> Result<()> {
        let expected = self.names.len();
        if found != expected {
            return Err(MenuError::ColumnLengthMismatch {
                column: column.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }
}

/// Build foods from parallel columns, in column order.
///
/// Fails if any column is not as long as `names`. Values are not otherwise
/// checked; negative calories or duplicate names pass through untouched.
pub fn build_menu(columns: &MenuColumns) -> Result<Vec<Food>> {
    columns.check_len("values", columns.values.len())?;
    columns.check_len("calories", columns.calories.len())?;
    if let Some(caps) = &columns.max_servings {
        columns.check_len("max_servings", caps.len())?;
    }
    for (nutrient, amounts) in &columns.nutrients {
        columns.check_len(nutrient, amounts.len())?;
    }

    let menu = (0..columns.names.len())
        .map(|i| Food {
            name: columns.names[i].clone(),
            value: columns.values[i],
            calories: columns.calories[i],
            max_servings: columns
                .max_servings
                .as_ref()
                .map_or(DEFAULT_MAX_SERVINGS, |caps| caps[i]),
            nutrients: columns
                .nutrients
                .iter()
                .map(|(nutrient, amounts)| (nutrient.clone(), amounts[i]))
                .collect(),
        })
        .collect();

    Ok(menu)
}
