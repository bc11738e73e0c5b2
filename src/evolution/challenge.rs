use crate::error::Result;

/// The objective being minimized.
///
/// A challenge maps a genome to a score, lower being better. It must be pure and
/// safe to call from several pools at once. Failures are returned as errors and
/// abort the evolution run that triggered them; the optimizer never retries.
///
/// Any `Fn(&[f64]) -> f64` closure is a challenge:
///
/// ```rust
/// use poolevo::evolution::Challenge;
///
/// let sphere = |genes: &[f64]| genes.iter().map(|x| x * x).sum::<f64>();
/// assert_eq!(sphere.score(&[3.0, 4.0]).unwrap(), 25.0);
/// ```
pub trait Challenge: Sync {
    fn score(&self, genes: &[f64]) -> Result<f64>;
}

impl<F> Challenge for F
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    fn score(&self, genes: &[f64]) -> Result<f64> {
        Ok(self(genes))
    }
}
