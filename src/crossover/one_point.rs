use super::{gene_at, offspring_template};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::crossover::CrossoverStrategy;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// Single-point crossover: draw one cut point `p` in `[1, len-1]`, where
/// `len` is the longer parent's gene count; the first offspring takes
/// `a`'s genes before `p` and `b`'s genes from `p` on, the second
/// offspring the complement. A position beyond the shorter parent's end
/// takes its gene from the longer parent instead. Produces exactly two
/// offspring. A couple where both parents have fewer than two genes is
/// returned unmodified (as deep copies), since no cut point exists.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover {
    pub custom_weight: f64,
}

impl OnePointCrossover {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> CrossoverStrategy<C> for OnePointCrossover {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("crossover::one_point", self.custom_weight)
    }

    fn cross(&self, couple: &Couple<C>, rng: &mut EngineRng) -> Vec<C> {
        let len = couple.a.genes().len().max(couple.b.genes().len());
        if len < 2 {
            return vec![offspring_template(&couple.a), offspring_template(&couple.b)];
        }

        let point = rng.range(1, len);

        let mut first = offspring_template(&couple.a);
        let mut second = offspring_template(&couple.b);

        {
            let genes = first.genes_mut();
            genes.clear();
            genes.extend((0..point).map(|i| gene_at(&couple.a, &couple.b, i)));
            genes.extend((point..len).map(|i| gene_at(&couple.b, &couple.a, i)));
        }
        {
            let genes = second.genes_mut();
            genes.clear();
            genes.extend((0..point).map(|i| gene_at(&couple.b, &couple.a, i)));
            genes.extend((point..len).map(|i| gene_at(&couple.a, &couple.b, i)));
        }
        first.repair();
        second.repair();

        vec![first, second]
    }
}
