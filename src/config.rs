//! Engine configuration: the options enumerates, built through
//! a fluent builder (`radiate-engines::GeneticEngineBuilder`'s idiom) that
//! validates everything calls a configuration error and
//! returns `Result<EvolveConfig<C>, GaError>` from `build()`.

use crate::chromosome::Chromosome;
use crate::crossover::{CrossoverStrategy, OnePointCrossover};
use crate::error::{config_ensure, GaResult};
use crate::group::StrategyGroup;
use crate::operator::OperatorInfo;
use crate::policy::{AdaptivePursuit, CustomWeightPolicy, FirstChoicePolicy, OperatorSelectionPolicy};
use crate::select::{ParentSelector, TournamentSelector};
use crate::survivor::{ElitistSurvivor, SurvivorSelector};
use crate::termination::{MaxEpochs, TerminationStrategy};

/// Default Adaptive-Pursuit parameters.
const DEFAULT_ETA: f64 = 0.1;
const DEFAULT_P_MIN: f64 = 0.05;
const DEFAULT_WINDOW: usize = 10;
const DEFAULT_BETA: f64 = 0.1;
const DEFAULT_U_MIN: u64 = 5;
const DEFAULT_WARMUP: u64 = 10;

/// Validated, immutable engine configuration. Built only through
/// [`EvolveConfigBuilder::build`].
pub struct EvolveConfig<C: Chromosome> {
    pub min_pct: f64,
    pub max_pct: f64,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub offspring_rate_override: Option<f64>,
    pub rng_seed: Option<u64>,
    pub parent_selection: StrategyGroup<C, dyn ParentSelector<C>>,
    pub crossover: StrategyGroup<C, dyn CrossoverStrategy<C>>,
    pub survivor_selection: StrategyGroup<C, dyn SurvivorSelector<C>>,
    pub termination: Vec<Box<dyn TerminationStrategy>>,
}

enum PolicyChoice {
    Default,
    Explicit(Box<dyn OperatorSelectionPolicy>, bool),
}

/// Fluent builder for [`EvolveConfig`]. Every setter is infallible;
/// validation happens once, in [`EvolveConfigBuilder::build`].
pub struct EvolveConfigBuilder<C: Chromosome> {
    min_pct: f64,
    max_pct: f64,
    mutation_rate: f64,
    crossover_rate: f64,
    offspring_rate_override: Option<f64>,
    rng_seed: Option<u64>,
    parent_selectors: Vec<Box<dyn ParentSelector<C>>>,
    parent_policy: PolicyChoice,
    crossover_strategies: Vec<Box<dyn CrossoverStrategy<C>>>,
    crossover_policy: PolicyChoice,
    survivor_selectors: Vec<Box<dyn SurvivorSelector<C>>>,
    survivor_policy: PolicyChoice,
    termination: Vec<Box<dyn TerminationStrategy>>,
}

impl<C: Chromosome + 'static> Default for EvolveConfigBuilder<C> {
    fn default() -> Self {
        EvolveConfigBuilder {
            min_pct: 0.5,
            max_pct: 2.0,
            mutation_rate: 0.2,
            crossover_rate: 0.9,
            offspring_rate_override: None,
            rng_seed: None,
            parent_selectors: Vec::new(),
            parent_policy: PolicyChoice::Default,
            crossover_strategies: Vec::new(),
            crossover_policy: PolicyChoice::Default,
            survivor_selectors: Vec::new(),
            survivor_policy: PolicyChoice::Default,
            termination: Vec::new(),
        }
    }
}

impl<C: Chromosome + 'static> EvolveConfigBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_pct(mut self, min_pct: f64) -> Self {
        self.min_pct = min_pct;
        self
    }

    pub fn max_pct(mut self, max_pct: f64) -> Self {
        self.max_pct = max_pct;
        self
    }

    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn offspring_rate_override(mut self, rate: f64) -> Self {
        self.offspring_rate_override = Some(rate);
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn parent_selectors(mut self, selectors: Vec<Box<dyn ParentSelector<C>>>) -> Self {
        self.parent_selectors = selectors;
        self
    }

    pub fn parent_selection_policy(mut self, policy: Box<dyn OperatorSelectionPolicy>, is_custom_weight: bool) -> Self {
        self.parent_policy = PolicyChoice::Explicit(policy, is_custom_weight);
        self
    }

    pub fn crossover_strategies(mut self, strategies: Vec<Box<dyn CrossoverStrategy<C>>>) -> Self {
        self.crossover_strategies = strategies;
        self
    }

    pub fn crossover_policy(mut self, policy: Box<dyn OperatorSelectionPolicy>, is_custom_weight: bool) -> Self {
        self.crossover_policy = PolicyChoice::Explicit(policy, is_custom_weight);
        self
    }

    pub fn survivor_selectors(mut self, selectors: Vec<Box<dyn SurvivorSelector<C>>>) -> Self {
        self.survivor_selectors = selectors;
        self
    }

    pub fn survivor_policy(mut self, policy: Box<dyn OperatorSelectionPolicy>, is_custom_weight: bool) -> Self {
        self.survivor_policy = PolicyChoice::Explicit(policy, is_custom_weight);
        self
    }

    pub fn termination(mut self, strategies: Vec<Box<dyn TerminationStrategy>>) -> Self {
        self.termination = strategies;
        self
    }

    /// Validate every option and assemble the immutable configuration.
    /// Each strategy family defaults to a sensible choice when the
    /// caller registered none.
    pub fn build(self) -> GaResult<EvolveConfig<C>> {
        config_ensure!(self.min_pct > 0.0 && self.min_pct <= 1.0, "min_pct must be in (0, 1]");
        config_ensure!(self.max_pct >= 1.0, "max_pct must be >= 1");
        config_ensure!(self.min_pct < self.max_pct, "min_pct must be < max_pct");
        config_ensure!((0.0..=1.0).contains(&self.mutation_rate), "mutation_rate must be in [0, 1]");
        config_ensure!((0.0..=1.0).contains(&self.crossover_rate), "crossover_rate must be in [0, 1]");
        if let Some(rate) = self.offspring_rate_override {
            config_ensure!(rate > 0.0 && rate <= 2.0, "offspring_rate_override must be in (0, 2]");
        }

        let parent_selectors = if self.parent_selectors.is_empty() {
            vec![Box::new(TournamentSelector::new(3, false)?) as Box<dyn ParentSelector<C>>]
        } else {
            self.parent_selectors
        };
        let parent_infos: Vec<OperatorInfo> = parent_selectors.iter().map(|s| s.info()).collect();
        let (parent_policy, parent_is_cw) = resolve_policy(self.parent_policy, &parent_infos)?;
        let parent_selection = StrategyGroup::new(parent_selectors, parent_infos, parent_policy, parent_is_cw)?;

        let crossover_strategies = if self.crossover_strategies.is_empty() {
            vec![Box::new(OnePointCrossover::new()) as Box<dyn CrossoverStrategy<C>>]
        } else {
            self.crossover_strategies
        };
        let crossover_infos: Vec<OperatorInfo> = crossover_strategies.iter().map(|s| s.info()).collect();
        let (crossover_policy, crossover_is_cw) = resolve_policy(self.crossover_policy, &crossover_infos)?;
        let crossover = StrategyGroup::new(crossover_strategies, crossover_infos, crossover_policy, crossover_is_cw)?;

        let survivor_selectors = if self.survivor_selectors.is_empty() {
            vec![Box::new(ElitistSurvivor::new(0.1)?) as Box<dyn SurvivorSelector<C>>]
        } else {
            self.survivor_selectors
        };
        let survivor_infos: Vec<OperatorInfo> = survivor_selectors.iter().map(|s| s.info()).collect();
        let (survivor_policy, survivor_is_cw) = resolve_policy(self.survivor_policy, &survivor_infos)?;
        let survivor_selection = StrategyGroup::new(survivor_selectors, survivor_infos, survivor_policy, survivor_is_cw)?;

        let termination = if self.termination.is_empty() {
            vec![Box::new(MaxEpochs::new(100)) as Box<dyn TerminationStrategy>]
        } else {
            self.termination
        };

        Ok(EvolveConfig {
            min_pct: self.min_pct,
            max_pct: self.max_pct,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            offspring_rate_override: self.offspring_rate_override,
            rng_seed: self.rng_seed,
            parent_selection,
            crossover,
            survivor_selection,
            termination,
        })
    }
}

/// Resolve the policy defaulting rules: explicit policy
/// wins; otherwise exactly one operator means First-Choice; otherwise any
/// positive custom weight means Custom-Weight; otherwise Adaptive-Pursuit.
fn resolve_policy(
    choice: PolicyChoice,
    infos: &[OperatorInfo],
) -> GaResult<(Box<dyn OperatorSelectionPolicy>, bool)> {
    match choice {
        PolicyChoice::Explicit(policy, is_custom_weight) => Ok((policy, is_custom_weight)),
        PolicyChoice::Default if infos.len() == 1 => Ok((Box::new(FirstChoicePolicy::new()), false)),
        PolicyChoice::Default if infos.iter().any(|i| i.custom_weight > 0.0) => {
            Ok((Box::new(CustomWeightPolicy::new()), true))
        }
        PolicyChoice::Default => {
            let policy = AdaptivePursuit::new(
                infos.len(),
                DEFAULT_ETA,
                DEFAULT_P_MIN,
                DEFAULT_WINDOW,
                DEFAULT_BETA,
                DEFAULT_U_MIN,
                DEFAULT_WARMUP,
            )?;
            Ok((Box::new(policy), false))
        }
    }
}
