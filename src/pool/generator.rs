use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Draws `n_pools` populations of `pool_size` genomes, every gene uniform in its bound.
///
/// Pools are filled in order from the one `rng`, so a seeded generator always
/// yields the same pool set.
///
/// # Errors
///
/// Returns `GeneticError::InvalidPoolSize` if `pool_size` or `n_pools` is zero.
///
/// # Example
///
/// ```rust
/// use poolevo::bounds::Bounds;
/// use poolevo::pool::generator::generate;
/// use poolevo::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::new(vec![(-1.0, 1.0), (0.0, 10.0)]).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let pools = generate(&bounds, 4, 2, &mut rng).unwrap();
///
/// assert_eq!(pools.len(), 2);
/// assert!(pools.iter().flatten().all(|genome| bounds.contains(genome)));
/// ```
pub fn generate(
    bounds: &Bounds,
    pool_size: usize,
    n_pools: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Vec<Genome>>> {
    if pool_size == 0 {
        return Err(GeneticError::InvalidPoolSize(
            "Pool size must be at least 1".to_string(),
        ));
    }
    if n_pools == 0 {
        return Err(GeneticError::InvalidPoolSize(
            "Number of pools must be at least 1".to_string(),
        ));
    }

    Ok((0..n_pools)
        .map(|_| {
            (0..pool_size)
                .map(|_| Genome::random(bounds, rng))
                .collect()
        })
        .collect())
}
