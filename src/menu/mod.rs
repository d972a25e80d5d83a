mod builder;
pub mod demo;
mod persistence;

pub use builder::{build_menu, MenuColumns};
pub use persistence::{load_menu, save_menu};
