//! `StrategyGroup<C, S>`: an order-preserving list of boxed strategies of
//! kind `S` (a parent selector, crossover strategy, or survivor selector)
//! together with the `OperatorSelectionPolicy` that chooses among them.

use std::marker::PhantomData;

use crate::chromosome::Chromosome;
use crate::error::{config_ensure, GaError, GaResult};
use crate::operator::{OperatorInfo, OperatorSelectionPolicy, Reward};
use crate::random::EngineRng;

pub struct StrategyGroup<C: Chromosome, S: ?Sized> {
    operators: Vec<Box<S>>,
    infos: Vec<OperatorInfo>,
    policy: Box<dyn OperatorSelectionPolicy>,
    last_choice: Option<usize>,
    _marker: PhantomData<C>,
}

impl<C: Chromosome, S: ?Sized> std::fmt::Debug for StrategyGroup<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyGroup")
            .field("infos", &self.infos)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<C: Chromosome, S: ?Sized> StrategyGroup<C, S> {
    /// Build a group from `operators` (each already yielding its own
    /// `OperatorInfo` via `infos`, in the same order) and `policy`.
    /// Rejects an empty operator list, and rejects any non-Custom-Weight
    /// policy when more than one operator is registered and one carries a
    /// positive custom weight. With exactly one operator there is no
    /// competing weight to be ambiguous against, so the conflict check is
    /// skipped (the caller always forces First-Choice in that case anyway).
    pub fn new(
        operators: Vec<Box<S>>,
        infos: Vec<OperatorInfo>,
        policy: Box<dyn OperatorSelectionPolicy>,
        policy_is_custom_weight: bool,
    ) -> GaResult<Self> {
        if operators.is_empty() {
            return Err(GaError::missing_component("operator"));
        }
        config_ensure!(
            infos.len() <= 1 || policy_is_custom_weight || !infos.iter().any(|i| i.custom_weight > 0.0),
            "a non-Custom-Weight policy cannot be used while an operator has a positive custom weight"
        );
        Ok(StrategyGroup {
            operators,
            infos,
            policy,
            last_choice: None,
            _marker: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Pick an operator via the policy and return it along with its
    /// index (needed later to route a reward back to the right operator
    /// via `feed_reward`).
    pub fn choose(&mut self, rng: &mut EngineRng, epoch: u64) -> (usize, &S) {
        let idx = self.policy.select(&self.infos, rng, epoch);
        self.last_choice = Some(idx);
        (idx, self.operators[idx].as_ref())
    }

    /// Re-fetch an operator by an index returned from an earlier
    /// `choose` call, without making a new policy decision.
    pub fn operator_at(&self, idx: usize) -> &S {
        self.operators[idx].as_ref()
    }

    /// Feed a reward back for the operator at `operator_index` (only
    /// meaningful, and only called by the Runner, when the policy is
    /// Adaptive-Pursuit; every other policy's `feed_reward` is a no-op).
    pub fn feed_reward(&mut self, operator_index: usize, reward: Reward) {
        self.policy.feed_reward(operator_index, reward);
    }
}
