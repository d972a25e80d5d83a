mod log;

pub use log::{append_goal_result, append_greedy_result, now_timestamp};
