//! # Genome
//!
//! A genome is a candidate solution: one real value per bound. A `ScoredGenome`
//! pairs a genome with the objective value it received when it was created.
//! Scores are never recomputed.

use std::ops::Deref;

use crate::{bounds::Bounds, rng::RandomNumberGenerator};

/// An ordered sequence of parameter values, one per bound.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Genome(Vec<f64>);

impl Genome {
    pub fn new(genes: Vec<f64>) -> Self {
        Self(genes)
    }

    /// Draws every gene uniformly from its bound.
    pub fn random(bounds: &Bounds, rng: &mut RandomNumberGenerator) -> Self {
        Self(bounds.iter().map(|bound| bound.sample(rng)).collect())
    }

    pub fn genes(&self) -> &[f64] {
        &self.0
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Genome {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Genome {
    fn from(genes: Vec<f64>) -> Self {
        Self(genes)
    }
}

impl FromIterator<f64> for Genome {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A genome together with its fitness score (lower is better).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGenome {
    /// The evaluated genome.
    pub genome: Genome,
    /// The objective value of the genome.
    pub score: f64,
}

impl ScoredGenome {
    pub fn new(genome: Genome, score: f64) -> Self {
        Self { genome, score }
    }
}
