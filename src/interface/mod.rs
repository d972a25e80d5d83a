pub mod prompts;
pub mod render;

pub use prompts::{prompt_target_value, prompt_yes_no};
pub use render::{display_goal_selection, display_menu, display_selection};
