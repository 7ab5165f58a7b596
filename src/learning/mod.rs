//! Tabular action-value learning.
//!
//! - **ValueTable**: sparse (position, action) -> estimate map
//! - **policy**: greedy and ε-greedy selection over a table
//! - **TdLearner**: the shared update rule, parameterised by a
//!   [`Bootstrap`] strategy (`QLearning`, `Sarsa`)

pub mod learner;
pub mod policy;
pub mod table;

pub use learner::{Bootstrap, Learner, MaxBootstrap, QLearning, SampledBootstrap, Sarsa, TdLearner};
pub use policy::{epsilon_greedy, greedy};
pub use table::ValueTable;
