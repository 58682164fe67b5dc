//! Exact combinatorics primitives shared by the probability engine.
//!
//! This module is composed of:
//! - `binomial`: Pascal-row binomial coefficients over arbitrary-precision integers.
//! - `compose`: lazy enumeration of bounded integer compositions.

mod binomial;
mod compose;

pub use binomial::binomial;
pub use compose::Compositions;
