pub mod constants;
pub mod goal_seeking;
pub mod ranking;
pub mod single_pick;

pub use constants::*;
pub use goal_seeking::{goal_first_select, GoalConstraints};
pub use ranking::{by_cost, by_density, by_value, rank_menu, rank_positions, Strategy};
pub use single_pick::greedy_select;
