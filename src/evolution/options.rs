//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one `evolve` call:
//! how many generations to run, the per-gene mutation rate, how much to log, and
//! from how many children on fitness evaluation is spread over rayon's thread pool.
//!
//! ## Example
//!
//! ```rust
//! use poolevo::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 0.05, LogLevel::Minimal);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert!(default_options.validate().is_ok());
//! ```
//!
//! ## Log levels
//!
//! - `Verbose`: every elite member of every generation, at `debug`.
//! - `Minimal`: the best score of every generation, at `info`.
//! - `None`: no per-generation events.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    mutation_rate: f64,
    log_level: LogLevel,
    /// Minimum number of children per generation before evaluation goes parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(num_generations: usize, mutation_rate: f64, log_level: LogLevel) -> Self {
        Self {
            num_generations,
            mutation_rate,
            log_level,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }

    /// Creates a new `EvolutionOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `num_generations` - The number of generations to run.
    /// * `mutation_rate` - The per-gene mutation probability, in `[0, 1]`.
    /// * `log_level` - The logging level for the generation loop.
    /// * `parallel_threshold` - The minimum number of children to evaluate in parallel.
    pub fn new_with_threshold(
        num_generations: usize,
        mutation_rate: f64,
        log_level: LogLevel,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            num_generations,
            mutation_rate,
            log_level,
            parallel_threshold,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum number of children evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks the values that cannot be enforced by their types.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidMutationRate` if the mutation rate is outside `[0, 1]`.
    /// A parallel threshold of zero is valid and evaluates every generation in parallel.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use poolevo::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .mutation_rate(0.2)
    ///     .log_level(LogLevel::Minimal)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.get_num_generations(), 200);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 20,
            mutation_rate: 0.1,
            log_level: LogLevel::None,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    mutation_rate: Option<f64>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = EvolutionOptions::builder().num_generations(5).build();
        assert_eq!(options.get_num_generations(), 5);
        assert_eq!(options.get_mutation_rate(), 0.1);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert_eq!(options.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_validate() {
        let mut options = EvolutionOptions::new(10, 0.5, LogLevel::None);
        assert!(options.validate().is_ok());

        options.set_mutation_rate(1.5);
        assert_eq!(
            options.validate(),
            Err(GeneticError::InvalidMutationRate(1.5))
        );

        options.set_mutation_rate(1.0);
        options.set_parallel_threshold(0);
        assert!(options.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let options: EvolutionOptions = serde_json::from_str(
            r#"{"num_generations": 50, "mutation_rate": 0.05, "log_level": "Minimal", "parallel_threshold": 200}"#,
        )
        .unwrap();

        assert_eq!(options.get_num_generations(), 50);
        assert_eq!(options.get_log_level(), LogLevel::Minimal);
        assert!(options.validate().is_ok());

        let negative = serde_json::from_str::<EvolutionOptions>(
            r#"{"num_generations": -1, "mutation_rate": 0.05, "log_level": "None", "parallel_threshold": 200}"#,
        );
        assert!(negative.is_err());
    }
}
