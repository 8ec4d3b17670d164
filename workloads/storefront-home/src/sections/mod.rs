//! Section renderers for the home page.

mod data_island;
mod featured_collections;
mod hero;
mod product_swimlane;

pub use data_island::*;
pub use featured_collections::*;
pub use hero::*;
pub use product_swimlane::*;
