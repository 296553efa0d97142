//! The Evolution Orchestrator: wires parent selection, crossover,
//! survivor selection, termination, and operator-selection policies
//! together into the per-generation algorithm.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::chromosome::{Chromosome, ChromosomeId};
use crate::config::EvolveConfig;
use crate::couple::Couple;
use crate::error::{config_ensure, GaError, GaResult};
use crate::operator::Reward;
use crate::population;
use crate::random::EngineRng;
use crate::termination::TerminationState;

/// The outcome of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome<C: Chromosome> {
    pub best: C,
    pub final_population: Vec<C>,
    pub epochs_run: u64,
    pub elapsed: Duration,
    pub best_fitness_trajectory: Vec<f64>,
}

/// Owns the engine's RNG, population, and configuration for the duration
/// of one run.
pub struct Runner<C: Chromosome> {
    config: EvolveConfig<C>,
    rng: EngineRng,
    population: Vec<C>,
    min_pop: usize,
    max_pop: usize,
    epoch: u64,
    best_fitness_trajectory: Vec<f64>,
    best_fitness_seen: f64,
}

impl<C: Chromosome> Runner<C> {
    /// Build a runner from a validated config and a non-empty initial
    /// population. `min_pop`/`max_pop`
    /// are computed once from the initial population size and held fixed
    /// for the run.
    pub fn new(config: EvolveConfig<C>, initial_population: Vec<C>) -> GaResult<Self> {
        config_ensure!(!initial_population.is_empty(), "initial population must be non-empty");
        let n = initial_population.len();
        let min_pop = ((config.min_pct * n as f64).ceil() as usize).max(1);
        let max_pop = ((config.max_pct * n as f64).floor() as usize).max(min_pop);

        let rng = match config.rng_seed {
            Some(seed) => EngineRng::from_seed(seed),
            None => EngineRng::from_entropy(),
        };

        Ok(Runner {
            config,
            rng,
            population: initial_population,
            min_pop,
            max_pop,
            epoch: 0,
            best_fitness_trajectory: Vec::new(),
            best_fitness_seen: f64::NEG_INFINITY,
        })
    }

    /// Run generations until a termination strategy fires, returning the
    /// best chromosome from the final population.
    pub fn run_to_completion(mut self) -> GaResult<RunOutcome<C>> {
        let start = Instant::now();

        loop {
            let best_idx = population::best_index(&mut self.population)
                .ok_or_else(|| GaError::invariant(self.epoch, "population became empty"))?;
            let best_fitness = self.population[best_idx].fitness();
            self.best_fitness_seen = self.best_fitness_seen.max(best_fitness);
            self.best_fitness_trajectory.push(self.best_fitness_seen);

            let stddev = population::stddev_fitness(&mut self.population);
            let state = TerminationState {
                epoch: self.epoch,
                elapsed: start.elapsed(),
                best_fitness,
                population_fitness_stddev: stddev,
            };
            if self
                .config
                .termination
                .iter_mut()
                .any(|t| t.should_terminate(&state))
            {
                info!(epoch = self.epoch, best_fitness, "terminating");
                break;
            }

            self.run_generation()?;
            self.epoch += 1;
        }

        let best_idx = population::best_index(&mut self.population).unwrap_or(0);
        let best = self.population[best_idx].clone();

        Ok(RunOutcome {
            best,
            final_population: self.population,
            epochs_run: self.epoch,
            elapsed: start.elapsed(),
            best_fitness_trajectory: self.best_fitness_trajectory,
        })
    }

    /// One epoch of selection, crossover, mutation, and survivor
    /// replacement (step 1, termination, runs in the caller's loop above).
    fn run_generation(&mut self) -> GaResult<()> {
        let epoch = self.epoch;

        let (survivor_idx, recommended_rate) = {
            let (idx, survivor) = self.config.survivor_selection.choose(&mut self.rng, epoch);
            (idx, survivor.recommended_rate())
        };
        let rate = self.config.offspring_rate_override.unwrap_or(recommended_rate);

        let pop_len = self.population.len();
        let required_raw = ((pop_len as f64 * rate).floor() as usize).max(1);
        let lower = self.min_pop.saturating_sub(pop_len).max(1);
        let upper = self.max_pop.saturating_sub(self.min_pop).max(lower);
        let required_offspring = required_raw.clamp(lower, upper);
        if required_offspring == 0 || required_offspring > 2 * self.max_pop {
            return Err(GaError::invariant(
                epoch,
                format!("required offspring {required_offspring} out of bounds"),
            ));
        }

        let offspring = self.produce_offspring(required_offspring)?;
        let offspring_ids: std::collections::HashSet<ChromosomeId> = offspring.iter().map(|c| c.id()).collect();

        let pre_fitness = population::fitness_values(&mut self.population);
        let pre_mean = population::mean(&pre_fitness);
        let (pre_min, pre_max) = population::range(&pre_fitness);
        let pre_stddev = population::stddev(&pre_fitness);

        let population_taken = std::mem::take(&mut self.population);
        let survivor_op = self.config.survivor_selection.operator_at(survivor_idx);
        self.population = survivor_op.apply(population_taken, offspring, &mut self.rng, epoch);

        let post_fitness = population::fitness_values(&mut self.population);
        let post_mean = population::mean(&post_fitness);
        let post_stddev = population::stddev(&post_fitness);

        let survivor_reward = Reward {
            pre: pre_mean,
            post: post_mean,
            norm_range: pre_max - pre_min,
            diversity_signal: post_stddev - pre_stddev,
        };
        self.config
            .survivor_selection
            .feed_reward(survivor_idx, survivor_reward);

        for chromosome in self.population.iter_mut() {
            if self.rng.chance(self.config.mutation_rate) {
                chromosome.mutate(&mut self.rng);
            }
            chromosome.repair();
            chromosome.invalidate_fitness();
            chromosome.set_age(chromosome.age() + 1);
        }
        // Step 7: the offspring born this generation start at age 0, not 1.
        for chromosome in self.population.iter_mut() {
            if offspring_ids.contains(&chromosome.id()) {
                chromosome.set_age(0);
            }
        }

        debug!(
            epoch,
            population = self.population.len(),
            best_fitness = post_fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            "generation complete"
        );
        Ok(())
    }

    /// Step 4: the offspring-accumulation loop.
    fn produce_offspring(&mut self, required_offspring: usize) -> GaResult<Vec<C>> {
        let epoch = self.epoch;
        let batch_cap = required_offspring.max(self.max_pop);
        let (pop_min, pop_max) = population::fitness_range(&mut self.population);
        let norm_range = pop_max - pop_min;

        let mut offspring: Vec<C> = Vec::with_capacity(required_offspring);
        while offspring.len() < required_offspring {
            let remaining = required_offspring - offspring.len();
            let request = batch_cap.min(2 * remaining);

            let (parent_idx, couples): (usize, Vec<Couple<C>>) = {
                let (idx, ps) = self.config.parent_selection.choose(&mut self.rng, epoch);
                let couples = ps.select_pairs(&mut self.population, &mut self.rng, request, epoch);
                (idx, couples)
            };
            if couples.is_empty() {
                break;
            }

            let mut batch_count = 0;
            for couple in couples {
                let (crossover_idx, mut produced) = {
                    let (idx, x) = self.config.crossover.choose(&mut self.rng, epoch);
                    let rate = x.rate_override().unwrap_or(self.config.crossover_rate);
                    let roll = self.rng.chance(rate);
                    let produced = if roll { x.cross(&couple, &mut self.rng) } else { Vec::new() };
                    (idx, produced)
                };

                if produced.is_empty() {
                    continue;
                }

                let mut a = couple.a.clone();
                let mut b = couple.b.clone();
                let pre = a.fitness().max(b.fitness());
                let offspring_fitness: Vec<f64> = produced.iter_mut().map(|c| c.fitness()).collect();
                let post = offspring_fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let diversity_signal = population::stddev(&offspring_fitness);

                let reward = Reward {
                    pre,
                    post,
                    norm_range,
                    diversity_signal,
                };
                self.config.crossover.feed_reward(crossover_idx, reward);
                self.config.parent_selection.feed_reward(parent_idx, reward);
                trace!(
                    epoch,
                    crossover_idx,
                    parent_idx,
                    raw_reward = reward.raw(),
                    "reward fed back"
                );

                batch_count += produced.len();
                offspring.extend(produced);
            }

            if batch_count == 0 {
                break;
            }
        }

        Ok(offspring)
    }
}
