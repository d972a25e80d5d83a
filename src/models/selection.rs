use std::collections::BTreeMap;

use crate::models::Food;

/// Running sums over a multiset of picked foods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub value: f64,
    pub calories: f64,
    /// Summed nutrients, keyed by nutrient name. A food without a given
    /// nutrient contributes nothing to its sum.
    pub nutrients: BTreeMap<String, f64>,
}

impl Totals {
    /// Add one serving of `food`.
    pub fn add(&mut self, food: &Food) {
        self.value += food.value;
        self.calories += food.calories;
        for (name, amount) in &food.nutrients {
            *self.nutrients.entry(name.clone()).or_insert(0.0) += amount;
        }
    }

    /// Summed amount of a nutrient, 0 when no pick carried it.
    pub fn nutrient(&self, name: &str) -> f64 {
        self.nutrients.get(name).copied().unwrap_or(0.0)
    }
}

/// Foods picked by one allocator run, in pick order.
///
/// Borrows from the menu it was computed from; duplicates appear once per
/// serving.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    pub foods: Vec<&'a Food>,
    pub totals: Totals,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one serving and fold it into the totals.
    pub fn push(&mut self, food: &'a Food) {
        self.totals.add(food);
        self.foods.push(food);
    }

    /// Number of picks (servings).
    pub fn servings(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Sum an arbitrary numeric attribute across the picked multiset.
    pub fn sum_by<F>(&self, attribute: F) -> f64
    where
        F: Fn(&Food) -> f64,
    {
        self.foods.iter().map(|food| attribute(food)).sum()
    }

    /// Picked names in pick order, joined by ", ".
    pub fn joined_names(&self) -> String {
        self.foods
            .iter()
            .map(|food| food.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of a goal-first run.
#[derive(Debug, Clone)]
pub struct GoalSelection<'a> {
    pub selection: Selection<'a>,
    pub target_value: f64,
    /// True iff the summed value met the target when the run stopped.
    pub reached: bool,
    /// Servings per food name; names never picked are absent.
    pub counts: BTreeMap<String, u32>,
}

impl GoalSelection<'_> {
    pub fn servings(&self) -> usize {
        self.selection.servings()
    }
}
