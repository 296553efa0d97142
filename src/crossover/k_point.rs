use super::{gene_at, offspring_template};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::crossover::CrossoverStrategy;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// K-point crossover: draw `k` distinct, sorted cut points, splitting the
/// genome into `k + 1` segments; the first offspring alternates segments
/// starting from `a`, the second starts from `b`. Builds fresh offspring
/// rather than swapping gene slices in place, since parents must never
/// be mutated by crossover.
#[derive(Clone, Debug)]
pub struct KPointCrossover {
    k: usize,
    pub custom_weight: f64,
}

impl KPointCrossover {
    pub fn new(k: usize) -> GaResult<Self> {
        config_ensure!(k >= 1, "KPointCrossover requires k >= 1 (use OnePointCrossover for k == 1 clarity)");
        Ok(KPointCrossover {
            k,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> CrossoverStrategy<C> for KPointCrossover {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("crossover::k_point", self.custom_weight)
    }

    fn cross(&self, couple: &Couple<C>, rng: &mut EngineRng) -> Vec<C> {
        let len = couple.a.genes().len().max(couple.b.genes().len());
        let k = self.k.min(len.saturating_sub(1));
        if k == 0 {
            return vec![offspring_template(&couple.a), offspring_template(&couple.b)];
        }

        let mut points = rng.sample_indices(len - 1, k);
        for p in points.iter_mut() {
            *p += 1;
        }
        points.sort_unstable();

        let mut first = offspring_template(&couple.a);
        let mut second = offspring_template(&couple.b);

        {
            let genes = first.genes_mut();
            genes.clear();
            genes.extend_from_slice(&build_alternating(&couple.a, &couple.b, &points, true));
        }
        {
            let genes = second.genes_mut();
            genes.clear();
            genes.extend_from_slice(&build_alternating(&couple.a, &couple.b, &points, false));
        }
        first.repair();
        second.repair();

        vec![first, second]
    }
}

/// Walk the `[0, points[0]), [points[0], points[1]), ...` segments,
/// alternating which parent each segment is copied from. `start_with_a`
/// picks whether segment 0 comes from `a` (building the first offspring)
/// or from `b` (building the second, the complementary pattern). A
/// position beyond the active segment's own parent length takes its gene
/// from the other (longer) parent instead.
fn build_alternating<C: Chromosome>(a: &C, b: &C, points: &[usize], start_with_a: bool) -> Vec<C::Gene> {
    let len = a.genes().len().max(b.genes().len());
    let mut genes = Vec::with_capacity(len);
    let mut segment_start = 0;
    let mut from_a = start_with_a;
    for &point in points.iter().chain(std::iter::once(&len)) {
        for i in segment_start..point {
            genes.push(if from_a { gene_at(a, b, i) } else { gene_at(b, a, i) });
        }
        segment_start = point;
        from_a = !from_a;
    }
    genes
}
