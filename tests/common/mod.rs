use pursuit_evolve::chromosome::{Chromosome, ChromosomeId};
use pursuit_evolve::random::EngineRng;

/// A minimal chromosome used across the integration suite: a fixed-length
/// vector of integers, fitness is their sum (a maximising objective with
/// a trivially computable optimum, useful for bounding test assertions).
#[derive(Clone, Debug)]
pub struct IntVecChromosome {
    genes: Vec<i32>,
    id: ChromosomeId,
    age: u32,
    cached_fitness: Option<f64>,
}

impl IntVecChromosome {
    pub fn new(genes: Vec<i32>) -> Self {
        IntVecChromosome {
            genes,
            id: ChromosomeId::next(),
            age: 0,
            cached_fitness: None,
        }
    }
}

impl Chromosome for IntVecChromosome {
    type Gene = i32;

    fn genes(&self) -> &[i32] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut Vec<i32> {
        &mut self.genes
    }

    fn id(&self) -> ChromosomeId {
        self.id
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    fn cached_fitness(&self) -> Option<f64> {
        self.cached_fitness
    }

    fn set_cached_fitness(&mut self, fitness: Option<f64>) {
        self.cached_fitness = fitness;
    }

    fn compute_fitness(&self) -> f64 {
        self.genes.iter().map(|&g| g as f64).sum()
    }

    fn mutate(&mut self, rng: &mut EngineRng) {
        let idx = rng.range(0, self.genes.len());
        self.genes[idx] = self.genes[idx].wrapping_add(if rng.chance(0.5) { 1 } else { -1 });
    }

    fn deep_copy(&self) -> Self {
        IntVecChromosome {
            genes: self.genes.clone(),
            id: ChromosomeId::next(),
            age: 0,
            cached_fitness: None,
        }
    }
}

pub fn random_population(rng: &mut EngineRng, size: usize, gene_len: usize, gene_max: i32) -> Vec<IntVecChromosome> {
    (0..size)
        .map(|_| {
            let genes = (0..gene_len)
                .map(|_| rng.range(0, gene_max as usize) as i32)
                .collect();
            IntVecChromosome::new(genes)
        })
        .collect()
}
