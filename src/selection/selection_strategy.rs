use std::fmt::Debug;

use crate::error::Result;
use crate::genome::ScoredGenome;

/// Trait for survivor selection in the generation loop.
///
/// A selection strategy reduces the candidate set of a generation (the previous
/// elite plus every freshly bred child) to the individuals that form the next
/// elite.
///
/// # Examples
///
/// ```
/// use poolevo::genome::{Genome, ScoredGenome};
/// use poolevo::selection::{ElitistSelection, SelectionStrategy};
/// use poolevo::error::Result;
///
/// fn main() -> Result<()> {
///     let candidates = vec![
///         ScoredGenome::new(Genome::new(vec![1.0]), 0.5),
///         ScoredGenome::new(Genome::new(vec![2.0]), 0.8),
///         ScoredGenome::new(Genome::new(vec![3.0]), 0.3),
///     ];
///
///     let selected = ElitistSelection.select(&candidates, 2)?;
///
///     assert_eq!(selected.len(), 2);
///     assert_eq!(selected[0].score, 0.3);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `candidates`, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_to_select` exceeds the number of candidates.
    fn select(
        &self,
        candidates: &[ScoredGenome],
        num_to_select: usize,
    ) -> Result<Vec<ScoredGenome>>;
}
