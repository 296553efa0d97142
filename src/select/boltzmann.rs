use super::{universal_pairs, weighted_pairs};
use crate::chromosome::Chromosome;
use crate::cooling::CoolingSchedule;
use crate::couple::Couple;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;

/// Boltzmann (simulated-annealing-style) parent selection: weight
/// `w(c) = exp((fitness(c) - fmax) / T(epoch))`, shifted by `fmax` to
/// avoid overflow.
#[derive(Clone, Debug)]
pub struct BoltzmannSelector {
    t0: f64,
    alpha: f64,
    epsilon: f64,
    schedule: CoolingSchedule,
    pub custom_weight: f64,
}

impl BoltzmannSelector {
    /// `t0` is the initial temperature (must be > 0), `alpha` the cooling
    /// rate (must be >= 0), `epsilon` the floor temperature used by the
    /// linear schedule (must be > 0).
    pub fn new(t0: f64, alpha: f64, epsilon: f64, schedule: CoolingSchedule) -> GaResult<Self> {
        config_ensure!(t0 > 0.0, "BoltzmannSelector requires t0 > 0");
        config_ensure!(alpha >= 0.0, "BoltzmannSelector requires alpha >= 0");
        config_ensure!(epsilon > 0.0, "BoltzmannSelector requires epsilon > 0");
        Ok(BoltzmannSelector {
            t0,
            alpha,
            epsilon,
            schedule,
            custom_weight: 0.0,
        })
    }

    fn temperature(&self, epoch: u64) -> f64 {
        self.schedule.temperature(self.t0, self.alpha, self.epsilon, epoch)
    }
}

impl<C: Chromosome> ParentSelector<C> for BoltzmannSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::boltzmann", self.custom_weight)
    }

    fn select_pairs(
        &self,
        population: &mut [C],
        rng: &mut EngineRng,
        k: usize,
        epoch: u64,
    ) -> Vec<Couple<C>> {
        if let Some(pairs) = universal_pairs(population, k) {
            return pairs;
        }

        let temperature = self.temperature(epoch);
        let fmax = population
            .iter_mut()
            .map(|c| c.fitness())
            .fold(f64::NEG_INFINITY, f64::max);

        weighted_pairs(population, rng, k, move |c| {
            ((c.fitness() - fmax) / temperature).exp()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Toy;
    use rstest::rstest;

    #[test]
    fn rejects_non_positive_t0() {
        let result = BoltzmannSelector::new(0.0, 0.1, 0.1, CoolingSchedule::Exponential);
        assert!(result.is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    #[case(50)]
    fn selects_k_couples_at_any_epoch(#[case] epoch: u64) {
        let mut population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = EngineRng::from_seed(2);
        let selector = BoltzmannSelector::new(4.0, 0.05, 0.1, CoolingSchedule::Exponential).unwrap();

        let couples = selector.select_pairs(&mut population, &mut rng, 8, epoch);
        assert_eq!(couples.len(), 8);
    }
}
