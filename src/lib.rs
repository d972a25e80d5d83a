pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod planner;
pub mod results;
pub mod telemetry;

pub use error::{MenuError, Result};
pub use models::{Food, GoalSelection, Selection, Totals};
