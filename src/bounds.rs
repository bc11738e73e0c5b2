//! # Bounds
//!
//! Per-parameter `(min, max)` box constraints. A dimension whose width is zero is
//! fixed: it never evolves and every genome carries its minimum there.
//!
//! ## Example
//!
//! ```rust
//! use poolevo::bounds::Bounds;
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (2.0, 2.0)]).unwrap();
//! assert_eq!(bounds.widths(), &[10.0, 0.0]);
//! assert!(bounds.is_fixed(1));
//! ```

use std::ops::Index;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// A closed interval for a single parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_fixed(&self) -> bool {
        self.width() == 0.0
    }

    /// Draws a value uniformly from the interval.
    ///
    /// Returns `min` for a fixed dimension. The result never exceeds `max`, even
    /// when `min + u * width` rounds upward.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> f64 {
        (self.min + rng.uniform() * self.width()).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.is_fixed() {
            value == self.min
        } else {
            (self.min..=self.max).contains(&value)
        }
    }

    fn validate(&self, dimension: usize) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GeneticError::InvalidBounds(format!(
                "dimension {} has a non-finite endpoint ({}, {})",
                dimension, self.min, self.max
            )));
        }
        if self.max < self.min {
            return Err(GeneticError::InvalidBounds(format!(
                "dimension {} has max {} below min {}",
                dimension, self.max, self.min
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Bound {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// The validated, ordered bounds of every parameter, with precomputed widths.
///
/// The number of bounds is the genome length for the whole optimizer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Bound>", into = "Vec<Bound>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    bounds: Vec<Bound>,
    widths: Vec<f64>,
}

impl Bounds {
    /// Validates `(min, max)` pairs and builds the bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidBounds` if `pairs` is empty, or if any pair
    /// has `max < min` or a non-finite endpoint.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::try_from(pairs.into_iter().map(Bound::from).collect::<Vec<_>>())
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn width(&self, dimension: usize) -> f64 {
        self.widths[dimension]
    }

    pub fn is_fixed(&self, dimension: usize) -> bool {
        self.widths[dimension] == 0.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bound> {
        self.bounds.iter()
    }

    /// Returns `true` if `genes` has one value per bound and every value lies in
    /// its interval (equal to `min` for fixed dimensions).
    pub fn contains(&self, genes: &[f64]) -> bool {
        genes.len() == self.len()
            && self
                .bounds
                .iter()
                .zip(genes)
                .all(|(bound, &value)| bound.contains(value))
    }

    /// Fails with `DimensionMismatch` unless `genes` has one value per bound.
    pub fn check_dimensions(&self, genes: &[f64]) -> Result<()> {
        if genes.len() != self.len() {
            return Err(GeneticError::DimensionMismatch {
                expected: self.len(),
                found: genes.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Bound>> for Bounds {
    type Error = GeneticError;

    fn try_from(bounds: Vec<Bound>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(GeneticError::InvalidBounds(
                "at least one dimension is required".to_string(),
            ));
        }
        for (dimension, bound) in bounds.iter().enumerate() {
            bound.validate(dimension)?;
        }
        let widths = bounds.iter().map(Bound::width).collect();
        Ok(Self { bounds, widths })
    }
}

impl From<Bounds> for Vec<Bound> {
    fn from(bounds: Bounds) -> Self {
        bounds.bounds
    }
}

impl Index<usize> for Bounds {
    type Output = Bound;

    fn index(&self, dimension: usize) -> &Bound {
        &self.bounds[dimension]
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = &'a Bound;
    type IntoIter = std::slice::Iter<'a, Bound>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
