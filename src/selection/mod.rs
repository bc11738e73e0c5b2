pub mod elitist;
pub mod selection_strategy;

pub use elitist::{select_elite, ElitistSelection};
pub use selection_strategy::SelectionStrategy;
