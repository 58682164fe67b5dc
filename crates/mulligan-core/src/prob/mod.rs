//! Hypergeometric draw probabilities built on the combinatorics kernel.
//!
//! This module is composed of:
//! - `engine`: single-type exact and upper-tail draw probabilities.
//! - `joint`: constrained multi-type hand counts and probabilities.

mod engine;
mod joint;

pub use engine::{DrawError, at_least_draw, exact_draw};
pub use joint::{joint_count, joint_probability};
