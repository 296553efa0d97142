use std::collections::VecDeque;

use crate::error::{config_ensure, GaResult};
use crate::operator::{OperatorInfo, OperatorSelectionPolicy, Reward};
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

#[derive(Clone, Debug)]
struct OperatorState {
    p: f64,
    reward: f64,
    usage_count: u64,
    recent_rewards: VecDeque<f64>,
}

/// Reinforcement-learning-style operator selection that learns a
/// probability vector from observed reward. The only policy that implements
/// `feed_reward`.
#[derive(Clone, Debug)]
pub struct AdaptivePursuit {
    eta: f64,
    p_min: f64,
    window: usize,
    beta: f64,
    u_min: u64,
    warmup_epochs: u64,
    states: Vec<OperatorState>,
    round_robin_cursor: usize,
}

impl AdaptivePursuit {
    /// `n` is the number of operators this policy instance will choose
    /// between. `p_min * n <= 1` must hold, else a
    /// configuration error.
    #[allow(clippy::too_many_arguments)]
    pub fn new(n: usize, eta: f64, p_min: f64, window: usize, beta: f64, u_min: u64, warmup_epochs: u64) -> GaResult<Self> {
        config_ensure!(n > 0, "AdaptivePursuit requires at least one operator");
        config_ensure!(p_min * n as f64 <= 1.0, "AdaptivePursuit requires p_min * n <= 1");
        config_ensure!((0.0..=1.0).contains(&eta), "AdaptivePursuit requires eta in [0, 1]");
        let initial_p = 1.0 / n as f64;
        Ok(AdaptivePursuit {
            eta,
            p_min,
            window: window.max(1),
            beta,
            u_min,
            warmup_epochs,
            states: (0..n)
                .map(|_| OperatorState {
                    p: initial_p,
                    reward: 0.0,
                    usage_count: 0,
                    recent_rewards: VecDeque::with_capacity(window),
                })
                .collect(),
            round_robin_cursor: 0,
        })
    }

    /// Current probability vector, exposed for tests and diagnostics.
    pub fn probabilities(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.p).collect()
    }

    fn recency_weighted_average(queue: &VecDeque<f64>) -> f64 {
        let len = queue.len();
        if len == 0 {
            return 0.0;
        }
        let raw_weights: Vec<f64> = (0..len).map(|i| (-0.1 * (len - 1 - i) as f64).exp()).collect();
        let total: f64 = raw_weights.iter().sum();
        queue
            .iter()
            .zip(raw_weights.iter())
            .map(|(&r, &w)| r * w / total)
            .sum()
    }

    /// Renormalise probabilities so every entry is `>= p_min` and they sum
    /// to exactly 1.
    fn renormalize(&mut self) {
        let n = self.states.len();
        let p_min = self.p_min;
        let excess_total: f64 = self.states.iter().map(|s| (s.p - p_min).max(0.0)).sum();
        let target_excess = 1.0 - p_min * n as f64;

        if excess_total <= 0.0 {
            let equal_share = 1.0 / n as f64;
            for s in &mut self.states {
                s.p = equal_share;
            }
        } else {
            for s in &mut self.states {
                let excess = (s.p - p_min).max(0.0);
                s.p = p_min + excess / excess_total * target_excess;
            }
        }

        let sum: f64 = self.states.iter().map(|s| s.p).sum();
        let drift = 1.0 - sum;
        if let Some(largest) = self
            .states
            .iter_mut()
            .max_by(|a, b| a.p.partial_cmp(&b.p).unwrap())
        {
            largest.p += drift;
        }
    }
}

impl OperatorSelectionPolicy for AdaptivePursuit {
    fn select(&mut self, infos: &[OperatorInfo], rng: &mut EngineRng, epoch: u64) -> usize {
        if epoch <= self.warmup_epochs {
            let choice = self.round_robin_cursor % infos.len();
            self.round_robin_cursor = (self.round_robin_cursor + 1) % infos.len();
            return choice;
        }

        let indices: Vec<usize> = (0..self.states.len()).collect();
        let weights: Vec<f64> = self.states.iter().map(|s| s.p).collect();
        let wheel = RouletteWheel::new(indices, weights).expect("probabilities sum to 1, all >= p_min > 0");
        *wheel.spin(rng)
    }

    fn feed_reward(&mut self, operator_index: usize, reward: Reward) {
        let raw = reward.raw() + self.beta * reward.diversity_signal;

        let window = self.window;
        let state = &mut self.states[operator_index];
        if state.recent_rewards.len() == window {
            state.recent_rewards.pop_front();
        }
        state.recent_rewards.push_back(raw);
        state.reward = Self::recency_weighted_average(&state.recent_rewards);
        state.usage_count += 1;

        if self.states.iter().all(|s| s.usage_count >= self.u_min) {
            let best = self
                .states
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.reward.partial_cmp(&b.reward).unwrap())
                .map(|(i, _)| i)
                .expect("non-empty operator set");

            for (i, s) in self.states.iter_mut().enumerate() {
                if i == best {
                    s.p += self.eta * (1.0 - s.p);
                } else {
                    s.p = (s.p - self.eta * s.p).max(self.p_min);
                }
            }
            self.renormalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPROVES: Reward = Reward {
        pre: 0.0,
        post: 1.0,
        norm_range: 1.0,
        diversity_signal: 0.0,
    };
    const WORSENS: Reward = Reward {
        pre: 1.0,
        post: 0.0,
        norm_range: 1.0,
        diversity_signal: 0.0,
    };

    /// Operator 0 always improves the population, operator 1 always
    /// makes it worse; after warmup plus enough adaptation rounds the
    /// policy should have learned to strongly prefer operator 0 while
    /// never starving operator 1 below its probability floor.
    #[test]
    fn learns_to_prefer_the_operator_that_improves_fitness() {
        let infos = [OperatorInfo::new("mock::improves"), OperatorInfo::new("mock::worsens")];
        let mut policy = AdaptivePursuit::new(2, 0.1, 0.05, 10, 0.1, 5, 10).unwrap();
        let mut rng = EngineRng::from_seed(42);

        for epoch in 0..=60u64 {
            let idx = policy.select(&infos, &mut rng, epoch);
            let reward = if idx == 0 { IMPROVES } else { WORSENS };
            policy.feed_reward(idx, reward);
        }

        let probabilities = policy.probabilities();
        assert!(probabilities[0] > 0.7, "p_improves={}", probabilities[0]);
        assert!(probabilities[1] >= 0.05 - 1e-9, "p_worsens={}", probabilities[1]);
        approx::assert_relative_eq!(probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}
