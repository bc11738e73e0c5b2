//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for operators that produce one
//! child genome from two parent genomes.
pub mod discrete;

use std::fmt::Debug;

use crate::{bounds::Bounds, error::Result, genome::Genome, rng::RandomNumberGenerator};

/// # BreedStrategy
///
/// Produces a single child from an ordered pair of parents. Implementations must
/// keep every non-fixed gene of the child inside its bound and must copy fixed
/// dimensions unchanged.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds one child from `first` and `second`.
    ///
    /// ## Parameters
    ///
    /// - `first`, `second`: the parents. Fixed dimensions are taken from `first`.
    /// - `bounds`: the bounds every gene must respect.
    /// - `rng`: the random source for mutation and parent choice.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if a parent does not have one gene
    /// per bound.
    fn cross(
        &self,
        first: &Genome,
        second: &Genome,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome>;
}

pub use discrete::DiscreteStrategy;
