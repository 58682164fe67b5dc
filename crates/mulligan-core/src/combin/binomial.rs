use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of ways to pick `k` items from `n` without replacement, ignoring
/// order.
///
/// Out-of-range arguments are not an error: any `k` below zero or above `n`
/// selects nothing and returns 0. The probability formulas built on top rely
/// on this so their boundary terms vanish instead of failing.
///
/// The coefficient is built with the additive Pascal-row recurrence over a
/// single row of `k + 1` cells, so no unrelated triangle entries are
/// computed. Results are exact at any size.
pub fn binomial(n: i64, k: i64) -> BigUint {
    if k < 0 || k > n {
        return BigUint::zero();
    }

    let width = k as usize + 1;
    let passes = (n - k) as usize;

    let mut row = vec![BigUint::one(); width];
    for _ in 0..passes {
        for i in 1..width {
            row[i] = &row[i - 1] + &row[i];
        }
    }

    row.swap_remove(width - 1)
}
