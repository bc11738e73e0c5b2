pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use launcher::EvolutionLauncher;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
