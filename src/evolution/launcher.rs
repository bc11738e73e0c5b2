use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    bounds::Bounds,
    breeding::BreedStrategy,
    error::{GeneticError, Result},
    genome::{Genome, ScoredGenome},
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
};

/// Runs the generation loop of a single population.
///
/// Each generation breeds one child for every ordered pair of distinct elite
/// members, scores every child once, and selects the next elite from the previous
/// elite plus all children. A population of `n` therefore costs `n * (n - 1)`
/// objective evaluations per generation.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<'a, Strategy, Selection, Chall> {
    strategy: Strategy,
    selection: Selection,
    challenge: &'a Chall,
    bounds: &'a Bounds,
}

impl<'a, Strategy, Selection, Chall> EvolutionLauncher<'a, Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The operator that breeds a child from two parents.
    /// * `selection` - The strategy that picks the survivors of each generation.
    /// * `challenge` - The objective used to score genomes.
    /// * `bounds` - The bounds every genome is bred within.
    pub fn new(
        strategy: Strategy,
        selection: Selection,
        challenge: &'a Chall,
        bounds: &'a Bounds,
    ) -> Self {
        Self {
            strategy,
            selection,
            challenge,
            bounds,
        }
    }

    /// Scores every genome of an unscored population, in order.
    ///
    /// # Errors
    ///
    /// Fails if a genome does not match the bounds or the challenge fails.
    pub fn score_population(
        &self,
        genomes: &[Genome],
        options: &EvolutionOptions,
    ) -> Result<Vec<ScoredGenome>> {
        self.score_all(genomes.to_vec(), options.get_parallel_threshold())
    }

    /// Evolves an unscored population and returns its final elite, best first.
    ///
    /// # Errors
    ///
    /// Fails on an empty population, a dimension mismatch, or a failing challenge.
    pub fn evolve(
        &self,
        genomes: &[Genome],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        let elite = self.score_population(genomes, options)?;
        let elite = self.evolve_scored(elite, options, rng)?;
        Ok(elite.into_iter().map(|scored| scored.genome).collect())
    }

    /// Runs `options.get_num_generations()` generations starting from an already
    /// scored elite.
    ///
    /// With zero generations the elite is returned unchanged, in its original order.
    #[instrument(
        level = "debug",
        skip_all,
        fields(pool_size = elite.len(), generations = options.get_num_generations())
    )]
    pub fn evolve_scored(
        &self,
        elite: Vec<ScoredGenome>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<ScoredGenome>> {
        if elite.is_empty() {
            return Err(GeneticError::InvalidPoolSize(
                "Cannot evolve an empty population".to_string(),
            ));
        }

        let mut elite = elite;
        for generation in 0..options.get_num_generations() {
            elite = self.next_generation(&elite, options, rng)?;

            match options.get_log_level() {
                LogLevel::Minimal => {
                    info!(generation, best_score = elite[0].score, "generation complete");
                }
                LogLevel::Verbose => {
                    info!(generation, best_score = elite[0].score, "generation complete");
                    elite.iter().enumerate().for_each(|(rank, member)| {
                        debug!(generation, rank, score = member.score, genome = ?member.genome);
                    });
                }
                LogLevel::None => {}
            }
        }

        Ok(elite)
    }

    /// Produces the elite of the next generation.
    ///
    /// Children are bred sequentially so the draws taken from `rng` do not depend
    /// on scheduling; only their evaluation may run in parallel.
    ///
    /// # Errors
    ///
    /// Fails on an empty elite, a dimension mismatch, or a failing challenge.
    pub fn next_generation(
        &self,
        elite: &[ScoredGenome],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<ScoredGenome>> {
        let pool_size = elite.len();
        if pool_size == 0 {
            return Err(GeneticError::InvalidPoolSize(
                "Cannot breed from an empty elite".to_string(),
            ));
        }

        let mut children = Vec::with_capacity(pool_size * (pool_size - 1));
        for (i, first) in elite.iter().enumerate() {
            for (j, second) in elite.iter().enumerate() {
                if i == j {
                    continue;
                }
                children.push(self.strategy.cross(
                    &first.genome,
                    &second.genome,
                    self.bounds,
                    rng,
                )?);
            }
        }

        let mut candidates = Vec::with_capacity(pool_size * pool_size);
        candidates.extend_from_slice(elite);
        candidates.extend(self.score_all(children, options.get_parallel_threshold())?);

        self.selection.select(&candidates, pool_size)
    }

    fn score_all(
        &self,
        genomes: Vec<Genome>,
        parallel_threshold: usize,
    ) -> Result<Vec<ScoredGenome>> {
        if genomes.len() >= parallel_threshold {
            genomes
                .into_par_iter()
                .map(|genome| self.evaluate(genome))
                .collect()
        } else {
            genomes
                .into_iter()
                .map(|genome| self.evaluate(genome))
                .collect()
        }
    }

    fn evaluate(&self, genome: Genome) -> Result<ScoredGenome> {
        self.bounds.check_dimensions(&genome)?;

        let score = self.challenge.score(&genome)?;
        if score.is_nan() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Objective returned NaN for genome {:?}",
                genome.genes()
            )));
        }

        Ok(ScoredGenome::new(genome, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::DiscreteStrategy;
    use crate::selection::ElitistSelection;

    fn sphere(genes: &[f64]) -> f64 {
        genes.iter().map(|x| x * x).sum()
    }

    fn initial(bounds: &Bounds, size: usize, rng: &mut RandomNumberGenerator) -> Vec<Genome> {
        (0..size).map(|_| Genome::random(bounds, rng)).collect()
    }

    #[test]
    fn test_next_generation_keeps_pool_size_and_order() {
        let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &sphere,
            &bounds,
        );
        let options = EvolutionOptions::default();

        let genomes = initial(&bounds, 6, &mut rng);
        let elite = launcher.score_population(&genomes, &options).unwrap();
        let next = launcher.next_generation(&elite, &options, &mut rng).unwrap();

        assert_eq!(next.len(), 6);
        assert!(next.windows(2).all(|pair| pair[0].score <= pair[1].score));
    }

    #[test]
    fn test_objective_called_once_per_child() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let counting = |genes: &[f64]| {
            calls.fetch_add(1, Ordering::SeqCst);
            sphere(genes)
        };
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.5).unwrap(),
            ElitistSelection,
            &counting,
            &bounds,
        );
        let options = EvolutionOptions::builder().num_generations(3).build();

        let genomes = initial(&bounds, 4, &mut rng);
        launcher.evolve(&genomes, &options, &mut rng).unwrap();

        // 4 initial scores, then 4 * 3 children per generation
        assert_eq!(calls.load(Ordering::SeqCst), 4 + 3 * 12);
    }

    #[test]
    fn test_zero_generations_returns_population_unchanged() {
        let bounds = Bounds::new(vec![(-5.0, 5.0)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &sphere,
            &bounds,
        );
        let options = EvolutionOptions::builder().num_generations(0).build();

        let genomes = initial(&bounds, 5, &mut rng);
        let evolved = launcher.evolve(&genomes, &options, &mut rng).unwrap();
        assert_eq!(evolved, genomes);
    }

    #[test]
    fn test_parallel_and_sequential_evaluation_agree() {
        let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0), (-5.0, 5.0)]).unwrap();
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.2).unwrap(),
            ElitistSelection,
            &sphere,
            &bounds,
        );
        let sequential =
            EvolutionOptions::new_with_threshold(5, 0.2, LogLevel::None, usize::MAX);
        let parallel = EvolutionOptions::new_with_threshold(5, 0.2, LogLevel::None, 1);

        let mut rng = RandomNumberGenerator::from_seed(4);
        let genomes = initial(&bounds, 8, &mut rng);

        let mut rng_a = RandomNumberGenerator::from_seed(5);
        let mut rng_b = RandomNumberGenerator::from_seed(5);
        let a = launcher.evolve(&genomes, &sequential, &mut rng_a).unwrap();
        let b = launcher.evolve(&genomes, &parallel, &mut rng_b).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_nan_score_is_rejected() {
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        let nan = |_: &[f64]| f64::NAN;
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &nan,
            &bounds,
        );

        let result =
            launcher.score_population(&[Genome::new(vec![0.0])], &EvolutionOptions::default());
        assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
    }

    #[test]
    fn test_challenge_error_propagates() {
        struct Failing;

        impl Challenge for Failing {
            fn score(&self, _genes: &[f64]) -> Result<f64> {
                Err(GeneticError::FitnessCalculation("simulation diverged".to_string()))
            }
        }

        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &Failing,
            &bounds,
        );
        let mut rng = RandomNumberGenerator::from_seed(6);

        let result = launcher.evolve(
            &[Genome::new(vec![0.0]), Genome::new(vec![0.5])],
            &EvolutionOptions::default(),
            &mut rng,
        );
        assert_eq!(
            result,
            Err(GeneticError::FitnessCalculation("simulation diverged".to_string()))
        );
    }

    #[test]
    fn test_mismatched_population_is_rejected() {
        let bounds = Bounds::new(vec![(-1.0, 1.0), (-1.0, 1.0)]).unwrap();
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &sphere,
            &bounds,
        );

        let result =
            launcher.score_population(&[Genome::new(vec![0.0])], &EvolutionOptions::default());
        assert_eq!(
            result,
            Err(GeneticError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let bounds = Bounds::new(vec![(-1.0, 1.0)]).unwrap();
        let launcher = EvolutionLauncher::new(
            DiscreteStrategy::new(0.1).unwrap(),
            ElitistSelection,
            &sphere,
            &bounds,
        );
        let mut rng = RandomNumberGenerator::from_seed(7);

        let result = launcher.evolve(&[], &EvolutionOptions::default(), &mut rng);
        assert!(matches!(result, Err(GeneticError::InvalidPoolSize(_))));
    }
}
