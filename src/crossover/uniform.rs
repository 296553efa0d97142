use super::{gene_at, offspring_template};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::crossover::CrossoverStrategy;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// Uniform crossover: for each gene position independently, flip a coin
/// (probability `mix_rate`, default 0.5) to decide whether the offspring
/// takes `a`'s allele or `b`'s; a position beyond the coin-winning
/// parent's length falls back to the other parent. Produces exactly one
/// offspring per call.
#[derive(Clone, Debug)]
pub struct UniformCrossover {
    mix_rate: f64,
    pub custom_weight: f64,
}

impl UniformCrossover {
    pub fn new(mix_rate: f64) -> Self {
        UniformCrossover {
            mix_rate: mix_rate.clamp(0.0, 1.0),
            custom_weight: 0.0,
        }
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        UniformCrossover::new(0.5)
    }
}

impl<C: Chromosome> CrossoverStrategy<C> for UniformCrossover {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("crossover::uniform", self.custom_weight)
    }

    fn cross(&self, couple: &Couple<C>, rng: &mut EngineRng) -> Vec<C> {
        let len = couple.a.genes().len().max(couple.b.genes().len());
        let mut child = offspring_template(&couple.a);
        let genes = child.genes_mut();
        genes.clear();
        for i in 0..len {
            if rng.chance(self.mix_rate) {
                genes.push(gene_at(&couple.a, &couple.b, i));
            } else {
                genes.push(gene_at(&couple.b, &couple.a, i));
            }
        }
        child.repair();
        vec![child]
    }
}
