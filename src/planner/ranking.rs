use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;

use crate::models::Food;

/// Score = value. Higher value ranks first.
pub fn by_value(food: &Food) -> f64 {
    food.value
}

/// Score = 1 / calories, so the cheapest food ranks first.
///
/// A zero-calorie food scores +infinity instead of faulting.
pub fn by_cost(food: &Food) -> f64 {
    if food.calories == 0.0 {
        f64::INFINITY
    } else {
        1.0 / food.calories
    }
}

/// Score = value per calorie; zero-calorie foods score +infinity.
pub fn by_density(food: &Food) -> f64 {
    food.density()
}

/// The built-in ranking heuristics.
///
/// Allocators take any `Fn(&Food) -> f64`; this enum only names the three
/// canonical ones for the driver and the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Value,
    Cost,
    Density,
}

impl Strategy {
    /// Key function implementing this strategy.
    pub fn key(self) -> fn(&Food) -> f64 {
        match self {
            Strategy::Value => by_value,
            Strategy::Cost => by_cost,
            Strategy::Density => by_density,
        }
    }

    /// Label written to the results log ("by value", "by cost", ...).
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Value => "by value",
            Strategy::Cost => "by cost",
            Strategy::Density => "by density",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort a menu by `key`, highest score first.
///
/// The sort is stable: foods with equal scores keep their menu order.
pub fn rank_menu<F>(menu: &[Food], key: F) -> Vec<&Food>
where
    F: Fn(&Food) -> f64,
{
    rank_positions(menu, key)
        .into_iter()
        .map(|idx| &menu[idx])
        .collect()
}

/// Same ordering as [`rank_menu`], as positions into `menu`.
pub fn rank_positions<F>(menu: &[Food], key: F) -> Vec<usize>
where
    F: Fn(&Food) -> f64,
{
    let scores: Vec<f64> = menu.iter().map(key).collect();
    let mut order: Vec<usize> = (0..menu.len()).collect();

    // Higher is better, so reverse the comparison
    order.sort_by(|&a, &b| descending(scores[a], scores[b]));

    order
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(ranked: &[&'a Food]) -> Vec<&'a str> {
        ranked.iter().copied().map(|f| f.name.as_str()).collect()
    }

    fn sample_menu() -> Vec<Food> {
        vec![
            Food::new("yogurt strawberry", 8.0, 130.0),
            Food::new("yogurt vanilla", 6.0, 120.0),
            Food::new("yogurt greek", 10.0, 100.0),
            Food::new("probiotic capsule", 25.0, 0.0),
        ]
    }

    #[test]
    fn test_by_value_order() {
        let menu = sample_menu();
        let ranked = rank_menu(&menu, by_value);
        assert_eq!(
            names(&ranked),
            vec!["probiotic capsule", "yogurt greek", "yogurt strawberry", "yogurt vanilla"]
        );
    }

    #[test]
    fn test_by_cost_puts_zero_calorie_first() {
        let menu = sample_menu();
        assert_eq!(by_cost(&menu[3]), f64::INFINITY);

        let ranked = rank_menu(&menu, by_cost);
        assert_eq!(
            names(&ranked),
            vec!["probiotic capsule", "yogurt greek", "yogurt vanilla", "yogurt strawberry"]
        );
    }

    #[test]
    fn test_by_density_puts_zero_calorie_first() {
        let menu = sample_menu();
        let ranked = rank_menu(&menu, by_density);
        assert_eq!(ranked[0].name, "probiotic capsule");
        assert_eq!(ranked[1].name, "yogurt greek");
    }

    #[test]
    fn test_equal_scores_keep_menu_order() {
        let menu = vec![
            Food::new("yogurt strawberry", 3.0, 90.0),
            Food::new("yogurt vanilla", 3.0, 90.0),
            Food::new("yogurt blueberry", 3.0, 90.0),
        ];

        for strategy in [Strategy::Value, Strategy::Cost, Strategy::Density] {
            let ranked = rank_menu(&menu, strategy.key());
            assert_eq!(
                names(&ranked),
                vec!["yogurt strawberry", "yogurt vanilla", "yogurt blueberry"],
                "{} reordered equal scores",
                strategy
            );
        }
    }

    #[test]
    fn test_key_functions_are_repeatable() {
        let menu = sample_menu();
        for food in &menu {
            for strategy in [Strategy::Value, Strategy::Cost, Strategy::Density] {
                let key = strategy.key();
                assert_eq!(key(food).to_bits(), key(food).to_bits());
            }
        }
    }

    #[test]
    fn test_custom_key() {
        let menu = sample_menu();
        let ranked = rank_menu(&menu, |f| -f.value);
        assert_eq!(ranked[0].name, "yogurt vanilla");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::Value.label(), "by value");
        assert_eq!(Strategy::Cost.to_string(), "by cost");
        assert_eq!(Strategy::Density.label(), "by density");
    }
}
