mod food;
mod selection;

pub use food::Food;
pub use selection::{GoalSelection, Selection, Totals};
