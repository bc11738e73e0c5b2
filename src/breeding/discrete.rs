//! # DiscreteStrategy
//!
//! Per-gene discrete crossover with uniform re-sampling mutation. Every gene of the
//! child is either copied wholesale from one of the two parents (chosen by a fair
//! coin) or, with probability `mutation_rate`, replaced by a fresh uniform sample
//! from its bound. Values are never blended.
use super::BreedStrategy;
use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// # DiscreteStrategy
///
/// ## Example
///
/// ```rust
/// use poolevo::bounds::Bounds;
/// use poolevo::breeding::{BreedStrategy, DiscreteStrategy};
/// use poolevo::genome::Genome;
/// use poolevo::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::new(vec![(0.0, 1.0), (0.0, 1.0)]).unwrap();
/// let strategy = DiscreteStrategy::new(0.0).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let first = Genome::new(vec![0.1, 0.2]);
/// let second = Genome::new(vec![0.8, 0.9]);
/// let child = strategy.cross(&first, &second, &bounds, &mut rng).unwrap();
///
/// assert!(child[0] == 0.1 || child[0] == 0.8);
/// assert!(child[1] == 0.2 || child[1] == 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteStrategy {
    mutation_rate: f64,
}

impl DiscreteStrategy {
    /// Creates a new `DiscreteStrategy` with the given per-gene mutation probability.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidMutationRate` if `mutation_rate` is not in `[0, 1]`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(GeneticError::InvalidMutationRate(mutation_rate));
        }
        Ok(Self { mutation_rate })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl BreedStrategy for DiscreteStrategy {
    fn cross(
        &self,
        first: &Genome,
        second: &Genome,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome> {
        bounds.check_dimensions(first)?;
        bounds.check_dimensions(second)?;

        let child = bounds
            .iter()
            .zip(first.iter().zip(second.iter()))
            .map(|(bound, (&a, &b))| {
                if bound.is_fixed() {
                    a
                } else if rng.uniform() < self.mutation_rate {
                    bound.sample(rng)
                } else if rng.coin() {
                    a
                } else {
                    b
                }
            })
            .collect();

        Ok(child)
    }
}
