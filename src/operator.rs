//! The operator record shared by every pluggable strategy and the reward
//! signal fed back to adaptive policies.
//!
//! Policies are written against `OperatorInfo` (a name plus a custom
//! weight) rather than against the parent-selector/crossover/survivor
//! traits directly, so a single `OperatorSelectionPolicy` implementation
//! serves all three operator families: each is configured once with the
//! list of operators it must choose from and is asked for an index on
//! every decision point.

use crate::random::EngineRng;

/// Per-operator metadata a policy needs to make a choice: a stable name
/// (used in logging and error messages) and a custom non-negative
/// weight, default 0 meaning unspecified.
#[derive(Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub name: &'static str,
    pub custom_weight: f64,
}

impl OperatorInfo {
    pub fn new(name: &'static str) -> Self {
        OperatorInfo {
            name,
            custom_weight: 0.0,
        }
    }

    pub fn with_weight(name: &'static str, custom_weight: f64) -> Self {
        OperatorInfo {
            name,
            custom_weight,
        }
    }
}

/// The observed pre/post outcome of using one operator once, normalised
/// into a reward for Adaptive-Pursuit.
#[derive(Clone, Copy, Debug)]
pub struct Reward {
    pub pre: f64,
    pub post: f64,
    pub norm_range: f64,
    pub diversity_signal: f64,
}

impl Reward {
    /// Raw reward before the diversity bonus: `(post - pre) / norm_range`
    /// if `norm_range > 0`, else `post - pre`.
    pub fn raw(&self) -> f64 {
        if self.norm_range > 0.0 {
            (self.post - self.pre) / self.norm_range
        } else {
            self.post - self.pre
        }
    }
}

/// A policy that picks one operator from a fixed, order-preserving set
/// per use. `select` is called once per decision point; `feed_reward` is
/// called afterwards only when the policy cares about feedback
/// (Adaptive-Pursuit); every other policy accepts the default no-op.
pub trait OperatorSelectionPolicy: std::fmt::Debug {
    /// Choose an index into `infos`.
    fn select(&mut self, infos: &[OperatorInfo], rng: &mut EngineRng, epoch: u64) -> usize;

    /// Record the outcome of having used the operator at `operator_index`
    /// last time `select` was called for this family.
    fn feed_reward(&mut self, operator_index: usize, reward: Reward) {
        let _ = (operator_index, reward);
    }
}
