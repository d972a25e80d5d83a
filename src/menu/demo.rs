//! Built-in yogurt menus used when no menu file is given.

use crate::error::Result;
use crate::menu::builder::{build_menu, MenuColumns};
use crate::models::Food;

/// Calorie budget paired with [`single_pick_menu`].
pub const SINGLE_PICK_BUDGET: f64 = 750.0;

/// Goal-first demo: probiotic units to reach.
pub const GOAL_TARGET: f64 = 40.0;

/// Goal-first demo: calorie ceiling.
pub const GOAL_MAX_CALORIES: f64 = 750.0;

/// Goal-first demo: servings ceiling.
pub const GOAL_MAX_SERVINGS: u32 = 6;

/// Six 90-calorie yogurts worth 3 probiotic units each.
pub fn single_pick_menu() -> Result<Vec<Food>> {
    let columns = MenuColumns::new(
        &[
            "yogurt strawberry",
            "yogurt vanilla",
            "yogurt blueberry",
            "yogurt greek",
            "yogurt honey",
            "yogurt vanilla",
        ],
        &[3.0, 3.0, 3.0, 3.0, 3.0, 3.0],
        &[90.0, 90.0, 90.0, 90.0, 90.0, 90.0],
    );
    build_menu(&columns)
}

/// Five yogurts plus a zero-calorie probiotic capsule, with repeat caps.
pub fn goal_menu() -> Result<Vec<Food>> {
    let columns = MenuColumns::new(
        &[
            "yogurt strawberry",
            "yogurt vanilla",
            "yogurt blueberry",
            "yogurt greek",
            "yogurt honey",
            "probiotic capsule",
        ],
        &[8.0, 6.0, 7.0, 10.0, 5.0, 25.0],
        &[130.0, 120.0, 125.0, 100.0, 140.0, 0.0],
    )
    .with_max_servings(&[2, 2, 2, 3, 1, 2]);
    build_menu(&columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_menus_build() {
        assert_eq!(single_pick_menu().unwrap().len(), 6);

        let goal = goal_menu().unwrap();
        assert_eq!(goal.len(), 6);
        assert_eq!(goal[5].name, "probiotic capsule");
        assert_eq!(goal[5].max_servings, 2);
    }
}
