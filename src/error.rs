//! # Error Types
//!
//! This module defines the error type shared by every operation of the optimizer.
//! User-input problems (bad bounds, pool sizes, mutation rates, generation counts)
//! are reported at the call that introduced them, before any state is touched.
//! `DimensionMismatch` signals a broken internal invariant and aborts the current
//! evolution run.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use poolevo::bounds::Bounds;
//! use poolevo::error::{GeneticError, Result};
//!
//! fn unit_square() -> Result<Bounds> {
//!     Bounds::new(vec![(0.0, 1.0), (0.0, 1.0)])
//! }
//!
//! assert!(unit_square().is_ok());
//! assert!(matches!(
//!     Bounds::new(vec![(1.0, -1.0)]),
//!     Err(GeneticError::InvalidBounds(_))
//! ));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use poolevo::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> poolevo::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| {
//!         GeneticError::InvalidPoolSize("no scores available".to_string())
//!     })
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while generating or evolving pools.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A dimension has `max < min`, a non-finite endpoint, or no dimensions were given.
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// A pool size or a number of pools below one.
    #[error("Invalid pool size: {0}")]
    InvalidPoolSize(String),

    /// A mutation rate outside of `[0, 1]`.
    #[error("Invalid mutation rate: {0} is outside of [0, 1]")]
    InvalidMutationRate(f64),

    /// A generation count that cannot be represented as a non-negative number.
    #[error("Invalid generation count: {0}")]
    InvalidGenerationCount(String),

    /// An operation that needs generated populations was called before `generate`.
    #[error("Pools not initialized: {0} requires a prior call to generate")]
    NotInitialized(String),

    /// A genome whose length differs from the number of bounds.
    #[error("Dimension mismatch: expected {expected} genes, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The selection was asked for more survivors than there are candidates.
    #[error("Cannot select {requested} individuals out of {available} candidates")]
    InsufficientCandidates { requested: usize, available: usize },

    /// The objective failed or produced an unusable score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for optimizer operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneticError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3 genes, found 2");

        let err = GeneticError::InvalidMutationRate(1.5);
        assert_eq!(err.to_string(), "Invalid mutation rate: 1.5 is outside of [0, 1]");

        let err = GeneticError::NotInitialized("pick_elites".to_string());
        assert!(err.to_string().contains("pick_elites"));
    }

    #[test]
    fn test_option_ext() {
        let present: Option<u8> = Some(3);
        assert_eq!(
            present.ok_or_else_genetic(|| GeneticError::InvalidPoolSize("missing".to_string())),
            Ok(3)
        );

        let missing: Option<u8> = None;
        assert_eq!(
            missing.ok_or_else_genetic(|| GeneticError::InvalidPoolSize("missing".to_string())),
            Err(GeneticError::InvalidPoolSize("missing".to_string()))
        );
    }
}
