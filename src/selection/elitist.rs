use crate::error::{GeneticError, Result};
use crate::genome::ScoredGenome;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that keeps the lowest-scored individuals.
///
/// Selection is a repeated strict-minimum scan: `k` times, the remaining candidate
/// with the strictly smallest score is taken out of a private copy of the
/// candidates and appended to the result. The first occurrence wins ties, so the
/// selection is stable with respect to candidate order. Survivors of the previous
/// generation come first in the candidate set, which makes them win ties against
/// identical children.
///
/// # Examples
///
/// ```
/// use poolevo::genome::{Genome, ScoredGenome};
/// use poolevo::selection::{ElitistSelection, SelectionStrategy};
///
/// let candidates = vec![
///     ScoredGenome::new(Genome::new(vec![1.0]), 0.5),
///     ScoredGenome::new(Genome::new(vec![2.0]), 0.1),
///     ScoredGenome::new(Genome::new(vec![3.0]), 0.1),
/// ];
///
/// let selected = ElitistSelection.select(&candidates, 2).unwrap();
/// assert_eq!(selected[0].genome[0], 2.0);
/// assert_eq!(selected[1].genome[0], 3.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        candidates: &[ScoredGenome],
        num_to_select: usize,
    ) -> Result<Vec<ScoredGenome>> {
        select_elite(candidates, num_to_select)
    }
}

/// Returns the `k` lowest-scored candidates, best first, without touching `candidates`.
///
/// # Errors
///
/// Returns `GeneticError::InsufficientCandidates` if `k > candidates.len()`.
pub fn select_elite(candidates: &[ScoredGenome], k: usize) -> Result<Vec<ScoredGenome>> {
    if k > candidates.len() {
        return Err(GeneticError::InsufficientCandidates {
            requested: k,
            available: candidates.len(),
        });
    }

    let mut remaining = candidates.to_vec();
    let mut elite = Vec::with_capacity(k);

    for _ in 0..k {
        let mut best = 0;
        for (idx, candidate) in remaining.iter().enumerate().skip(1) {
            if candidate.score < remaining[best].score {
                best = idx;
            }
        }
        elite.push(remaining.remove(best));
    }

    Ok(elite)
}
