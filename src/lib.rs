pub mod bounds;
pub mod breeding;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod pool;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use bounds::{Bound, Bounds};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::Challenge;
pub use genome::{Genome, ScoredGenome};
pub use pool::{PoolSet, Population};
