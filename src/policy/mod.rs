//! Operator-selection policies: meta-strategies that pick one operator
//! (parent selector / crossover / survivor selector) per use from a
//! fixed, order-preserving list.

mod adaptive_pursuit;
mod custom_weight;
mod first_choice;
mod random;
mod round_robin;

pub use adaptive_pursuit::AdaptivePursuit;
pub use custom_weight::CustomWeightPolicy;
pub use first_choice::FirstChoicePolicy;
pub use random::RandomPolicy;
pub use round_robin::RoundRobinPolicy;
