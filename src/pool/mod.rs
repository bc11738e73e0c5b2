//! # PoolSet
//!
//! The `PoolSet` owns `n_pools` independent populations ("islands") of genomes and
//! drives their generation and evolution. Pools never exchange genomes, scores or
//! random state, so they evolve concurrently on rayon's thread pool. Each pool
//! draws from its own stream forked from the master generator in a fixed order,
//! which keeps seeded runs reproducible regardless of scheduling.
//!
//! A pool set starts uninitialized; `generate` fills it, after which `evolve` may
//! be called any number of times, each call continuing from the previous elite.
//!
//! ## Example
//!
//! ```rust
//! use poolevo::bounds::Bounds;
//! use poolevo::pool::PoolSet;
//!
//! let sphere = |genes: &[f64]| genes.iter().map(|x| x * x).sum::<f64>();
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
//!
//! let mut pools = PoolSet::with_seed(sphere, 3, bounds, 42).unwrap();
//! pools.generate(5).unwrap();
//! pools.evolve(10, 0.1).unwrap();
//!
//! let elites = pools.pick_elites().unwrap();
//! assert_eq!(elites.len(), 3);
//! ```
pub mod generator;

use std::fmt::Display;

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    bounds::Bounds,
    breeding::DiscreteStrategy,
    error::{GeneticError, OptionExt, Result},
    evolution::{Challenge, EvolutionLauncher, EvolutionOptions, LogLevel},
    genome::{Genome, ScoredGenome},
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
};

/// One island of the pool set.
#[derive(Debug, Clone, PartialEq)]
pub enum Population {
    /// Freshly generated genomes, in generation order.
    Unscored(Vec<Genome>),
    /// Scored genomes. Best first after at least one generation; a zero-generation
    /// `evolve` keeps generation order.
    Scored(Vec<ScoredGenome>),
}

impl Population {
    pub fn len(&self) -> usize {
        match self {
            Population::Unscored(genomes) => genomes.len(),
            Population::Scored(elite) => elite.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The genome at index 0. This is the best one only after at least one
    /// generation has run.
    pub fn best(&self) -> Option<&Genome> {
        match self {
            Population::Unscored(genomes) => genomes.first(),
            Population::Scored(elite) => elite.first().map(|scored| &scored.genome),
        }
    }

    /// The score of the genome at index 0, if it has been scored.
    pub fn best_score(&self) -> Option<f64> {
        match self {
            Population::Unscored(_) => None,
            Population::Scored(elite) => elite.first().map(|scored| scored.score),
        }
    }

    pub fn genomes(&self) -> Vec<&Genome> {
        match self {
            Population::Unscored(genomes) => genomes.iter().collect(),
            Population::Scored(elite) => elite.iter().map(|scored| &scored.genome).collect(),
        }
    }
}

/// A set of independently evolving populations minimizing one challenge.
#[derive(Debug, Clone)]
pub struct PoolSet<Chall> {
    challenge: Chall,
    bounds: Bounds,
    n_pools: usize,
    pools: Option<Vec<Population>>,
    rng: RandomNumberGenerator,
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl<Chall> PoolSet<Chall>
where
    Chall: Challenge,
{
    /// Creates an uninitialized pool set whose randomness is seeded from entropy.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPoolSize` if `n_pools` is zero.
    pub fn new(challenge: Chall, n_pools: usize, bounds: Bounds) -> Result<Self> {
        if n_pools == 0 {
            return Err(GeneticError::InvalidPoolSize(
                "Number of pools must be at least 1".to_string(),
            ));
        }

        let defaults = EvolutionOptions::default();
        Ok(Self {
            challenge,
            bounds,
            n_pools,
            pools: None,
            rng: RandomNumberGenerator::new(),
            parallel_threshold: defaults.get_parallel_threshold(),
            log_level: defaults.get_log_level(),
        })
    }

    /// Creates an uninitialized pool set whose randomness is fully determined by `seed`.
    pub fn with_seed(
        challenge: Chall,
        n_pools: usize,
        bounds: Bounds,
        seed: u64,
    ) -> Result<Self> {
        let rng = RandomNumberGenerator::from_seed(seed);
        Ok(Self::new(challenge, n_pools, bounds)?.with_rng(rng))
    }

    /// Replaces the master random number generator.
    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = rng;
        self
    }

    /// Sets from how many children per generation evaluation runs in parallel.
    /// Zero makes every evaluation parallel.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Sets the per-generation logging used by `evolve`.
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn n_pools(&self) -> usize {
        self.n_pools
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The current populations, or `None` before the first `generate`.
    pub fn populations(&self) -> Option<&[Population]> {
        self.pools.as_deref()
    }

    /// Fills every pool with `pool_size` uniformly random genomes, replacing any
    /// previous populations.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPoolSize` if `pool_size` is zero. The pool set
    /// is left untouched in that case.
    #[instrument(level = "debug", skip(self), fields(n_pools = self.n_pools))]
    pub fn generate(&mut self, pool_size: usize) -> Result<()> {
        let pools = generator::generate(&self.bounds, pool_size, self.n_pools, &mut self.rng)?;
        self.pools = Some(pools.into_iter().map(Population::Unscored).collect());

        info!(n_pools = self.n_pools, pool_size, "generated pools");
        Ok(())
    }

    /// Evolves every pool for `n_gen` generations with the given per-gene mutation rate.
    ///
    /// `n_gen` may be any integer type; negative counts are rejected.
    ///
    /// # Errors
    ///
    /// - `GeneticError::InvalidGenerationCount` if `n_gen` is negative.
    /// - `GeneticError::InvalidMutationRate` if `mutation_rate` is outside `[0, 1]`.
    /// - `GeneticError::NotInitialized` if `generate` was never called.
    /// - Any error raised while evolving a pool, in which case no pool is updated.
    pub fn evolve<N>(&mut self, n_gen: N, mutation_rate: f64) -> Result<()>
    where
        N: TryInto<usize> + Display + Copy,
    {
        let generations = n_gen.try_into().map_err(|_| {
            GeneticError::InvalidGenerationCount(format!(
                "{} is not a valid number of generations",
                n_gen
            ))
        })?;

        let options = EvolutionOptions::new_with_threshold(
            generations,
            mutation_rate,
            self.log_level,
            self.parallel_threshold,
        );
        self.evolve_with_options(&options)
    }

    /// Evolves every pool as configured by `options`.
    ///
    /// Validation happens before any state changes. New populations and the
    /// advanced master generator are committed only when every pool evolved
    /// successfully, so a failed call does not shift later seeded results.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            generations = options.get_num_generations(),
            mutation_rate = options.get_mutation_rate()
        )
    )]
    pub fn evolve_with_options(&mut self, options: &EvolutionOptions) -> Result<()> {
        options.validate()?;
        let strategy = DiscreteStrategy::new(options.get_mutation_rate())?;
        let pools = self
            .pools
            .as_ref()
            .ok_or_else_genetic(|| GeneticError::NotInitialized("evolve".to_string()))?;

        // Forked from a copy so a failed run leaves the master stream untouched
        let mut master = self.rng.clone();
        let streams: Vec<RandomNumberGenerator> = pools.iter().map(|_| master.fork()).collect();
        let launcher =
            EvolutionLauncher::new(strategy, ElitistSelection, &self.challenge, &self.bounds);

        let evolved = pools
            .par_iter()
            .zip(streams)
            .enumerate()
            .map(|(index, (population, mut rng))| -> Result<Population> {
                let elite = match population {
                    Population::Unscored(genomes) => {
                        launcher.score_population(genomes, options)?
                    }
                    Population::Scored(elite) => elite.clone(),
                };
                let elite = launcher.evolve_scored(elite, options, &mut rng)?;

                debug!(pool = index, best_score = elite[0].score, "pool evolved");
                Ok(Population::Scored(elite))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            n_pools = self.n_pools,
            generations = options.get_num_generations(),
            "evolved pools"
        );
        self.pools = Some(evolved);
        self.rng = master;
        Ok(())
    }

    /// Returns the index-0 genome of every pool, in pool order.
    ///
    /// After `evolve` this is each pool's best genome. Right after `generate` it is
    /// simply the first genome drawn for each pool.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::NotInitialized` if `generate` was never called.
    pub fn pick_elites(&self) -> Result<Vec<Genome>> {
        self.initialized("pick_elites")?
            .iter()
            .map(|population| {
                population.best().cloned().ok_or_else_genetic(|| {
                    GeneticError::InvalidPoolSize("Population is empty".to_string())
                })
            })
            .collect()
    }

    /// Returns the score of every pool's index-0 genome, `None` for pools that
    /// were never evolved.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::NotInitialized` if `generate` was never called.
    pub fn best_scores(&self) -> Result<Vec<Option<f64>>> {
        Ok(self
            .initialized("best_scores")?
            .iter()
            .map(Population::best_score)
            .collect())
    }

    fn initialized(&self, operation: &str) -> Result<&[Population]> {
        self.pools
            .as_deref()
            .ok_or_else_genetic(|| GeneticError::NotInitialized(operation.to_string()))
    }
}
