mod common;

use std::collections::HashMap;

use common::IntVecChromosome;
use pursuit_evolve::chromosome::{Chromosome, ChromosomeId};
use pursuit_evolve::random::EngineRng;
use pursuit_evolve::select::{ParentSelector, RouletteSelector};

/// Fitness-proportional selection should mate high-fitness individuals
/// more often than low-fitness ones: the mating-frequency ranking among a
/// handful of standout individuals should match their fitness ranking,
/// and the single worst individual should be mated least often.
#[test]
fn roulette_mating_frequency_tracks_fitness_rank() {
    let mut rng = EngineRng::from_seed(42);

    let mut population: Vec<IntVecChromosome> = Vec::with_capacity(505);
    for _ in 0..500 {
        population.push(IntVecChromosome::new(vec![1]));
    }
    // Five standouts with distinct, strictly increasing fitness.
    for fitness in [200, 400, 600, 800, 1000] {
        population.push(IntVecChromosome::new(vec![fitness]));
    }

    let standout_ids: Vec<ChromosomeId> = population[500..].iter().map(|c| c.id()).collect();
    let low_id = population[0].id();

    let selector = RouletteSelector::new();
    let couples = selector.select_pairs(&mut population, &mut rng, 100_000, 0);

    let mut counts: HashMap<ChromosomeId, u64> = HashMap::new();
    for couple in &couples {
        *counts.entry(couple.a.id()).or_insert(0) += 1;
        *counts.entry(couple.b.id()).or_insert(0) += 1;
    }

    let standout_counts: Vec<u64> = standout_ids.iter().map(|id| *counts.get(id).unwrap_or(&0)).collect();
    for window in standout_counts.windows(2) {
        assert!(
            window[1] > window[0],
            "expected mating frequency to increase with fitness, got {standout_counts:?}"
        );
    }

    let low_count = *counts.get(&low_id).unwrap_or(&0);
    let least_standout = *standout_counts.first().unwrap();
    assert!(
        low_count < least_standout,
        "expected the lowest-fitness individual to mate less than any standout, low={low_count} least_standout={least_standout}"
    );
}
