use super::universal_pairs;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;
use crate::wheel::RouletteWheel;

/// Elitist parent selection:
///
/// - the top `ceil(elite_frac * N)` chromosomes are "elites";
/// - the next `ceil(nonelite_frac * (N - elites))` chromosomes, chosen at
///   random from the remainder, are "mating non-elites";
/// - Phase 1 guarantees every elite takes part in at least one couple,
///   drawing its partner from the eligible pool (respecting
///   `allow_cross`);
/// - Phase 2 fills the remaining couples via fitness-weighted selection,
///   also respecting `allow_cross`.
///
/// `allow_cross` decides whether an elite may pair with a non-elite: when
/// `false`, elites only ever pair with other elites and mating non-elites
/// only ever pair with other mating non-elites.
#[derive(Clone, Debug)]
pub struct ElitistSelector {
    elite_frac: f64,
    nonelite_frac: f64,
    allow_cross: bool,
    pub custom_weight: f64,
}

impl ElitistSelector {
    pub fn new(elite_frac: f64, nonelite_frac: f64, allow_cross: bool) -> GaResult<Self> {
        config_ensure!((0.0..=1.0).contains(&elite_frac), "ElitistSelector requires elite_frac in [0, 1]");
        config_ensure!((0.0..=1.0).contains(&nonelite_frac), "ElitistSelector requires nonelite_frac in [0, 1]");
        Ok(ElitistSelector {
            elite_frac,
            nonelite_frac,
            allow_cross,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> ParentSelector<C> for ElitistSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::elitist", self.custom_weight)
    }

    fn select_pairs(
        &self,
        population: &mut [C],
        rng: &mut EngineRng,
        k: usize,
        _epoch: u64,
    ) -> Vec<Couple<C>> {
        if let Some(pairs) = universal_pairs(population, k) {
            return pairs;
        }

        let n = population.len();
        let fitness: Vec<f64> = population.iter_mut().map(|c| c.fitness()).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| fitness[j].partial_cmp(&fitness[i]).unwrap());

        let elite_count = (self.elite_frac * n as f64).ceil() as usize;
        let elite_count = elite_count.min(n);
        let elites: Vec<usize> = order[..elite_count].to_vec();
        let remainder: Vec<usize> = order[elite_count..].to_vec();

        let nonelite_count = (self.nonelite_frac * remainder.len() as f64).ceil() as usize;
        let nonelite_count = nonelite_count.min(remainder.len());
        let mut shuffled_remainder = remainder.clone();
        rng.shuffle(&mut shuffled_remainder);
        let mating_nonelites: Vec<usize> = shuffled_remainder[..nonelite_count].to_vec();

        let mut couples = Vec::with_capacity(k);

        // Phase 1: every elite gets at least one couple, if it has an
        // eligible partner.
        for &elite in &elites {
            let pool = self.eligible_partner_pool(&elites, &mating_nonelites, elite);
            if pool.is_empty() {
                continue;
            }
            let partner = pool[rng.range(0, pool.len())];
            couples.push(Couple::new(population[elite].clone(), population[partner].clone()));
        }

        // Phase 2: fill the rest via fitness-weighted selection,
        // restricted by `allow_cross`.
        while couples.len() < k {
            let group = self.pick_mating_group(&elites, &mating_nonelites, rng);
            if group.len() < 2 {
                // Degenerate population shape (e.g. a single elite and no
                // mating non-elites with allow_cross disabled); fall back
                // to the full eligible pool rather than loop forever.
                let mut all: Vec<usize> = elites.iter().chain(mating_nonelites.iter()).copied().collect();
                all.dedup();
                if all.len() < 2 {
                    break;
                }
                couples.push(self.weighted_couple(population, &all, rng));
            } else {
                couples.push(self.weighted_couple(population, &group, rng));
            }
        }

        couples
    }
}

impl ElitistSelector {
    fn eligible_partner_pool(&self, elites: &[usize], nonelites: &[usize], member: usize) -> Vec<usize> {
        if self.allow_cross {
            elites
                .iter()
                .chain(nonelites.iter())
                .copied()
                .filter(|&i| i != member)
                .collect()
        } else if elites.contains(&member) {
            elites.iter().copied().filter(|&i| i != member).collect()
        } else {
            nonelites.iter().copied().filter(|&i| i != member).collect()
        }
    }

    fn pick_mating_group(&self, elites: &[usize], nonelites: &[usize], rng: &mut EngineRng) -> Vec<usize> {
        if self.allow_cross {
            elites.iter().chain(nonelites.iter()).copied().collect()
        } else if rng.chance(0.5) {
            elites.to_vec()
        } else {
            nonelites.to_vec()
        }
    }

    fn weighted_couple<C: Chromosome>(
        &self,
        population: &mut [C],
        pool: &[usize],
        rng: &mut EngineRng,
    ) -> Couple<C> {
        let weights: Vec<f64> = pool.iter().map(|&i| population[i].fitness()).collect();
        let mut wheel = RouletteWheel::new(pool.to_vec(), weights).expect("non-empty, validated weights");
        let first = wheel.spin_and_remove(rng);
        let second = wheel.spin_and_remove(rng);
        Couple::new(population[first].clone(), population[second].clone())
    }
}
