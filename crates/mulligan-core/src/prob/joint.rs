//! Constrained multi-type hand counts and probabilities.

use super::engine::{DrawError, hand_ratio};
use crate::combin::{Compositions, binomial};
use crate::model::bounds::DrawBounds;
use crate::model::pool::CardPool;
use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::{One, Zero};

fn validate_pool(
    pool: &CardPool,
    hand_size: u32,
    bounds: &DrawBounds,
) -> Result<(), DrawError> {
    let deck_size = pool.deck_size();
    if hand_size > deck_size {
        return Err(DrawError::HandExceedsDeck {
            hand_size,
            deck_size,
        });
    }
    if bounds.len() > pool.type_count() {
        return Err(DrawError::BoundsLongerThanPool {
            bounds_len: bounds.len(),
            type_count: pool.type_count(),
        });
    }
    Ok(())
}

/// Sums, over every admissible split of the hand across types, the number of
/// ways to realize that split from each type's own pool.
fn constrained_hands(pool: &CardPool, hand_size: u32, bounds: &DrawBounds) -> BigUint {
    let resolved = bounds.resolve(pool);
    let mut total = BigUint::zero();
    for split in Compositions::bounded(&resolved.minimums, &resolved.maximums, hand_size) {
        let mut ways = BigUint::one();
        for (&available, &drawn) in pool.counts().iter().zip(split.iter()) {
            ways *= binomial(i64::from(available), i64::from(drawn));
            if ways.is_zero() {
                break;
            }
        }
        total += ways;
    }
    total
}

/// Number of distinct hands of `hand_size` in which every type's draw count
/// lies within its (defaulted) bounds simultaneously.
///
/// Fully unconstrained bounds recover the plain hand count
/// `C(deck_size, hand_size)` exactly. Infeasible bounds yield 0.
pub fn joint_count(
    pool: &CardPool,
    hand_size: u32,
    bounds: &DrawBounds,
) -> Result<BigUint, DrawError> {
    validate_pool(pool, hand_size, bounds)?;
    Ok(constrained_hands(pool, hand_size, bounds))
}

/// Fraction of all hands of `hand_size` satisfying the bounds: the
/// [`joint_count`] numerator over `C(deck_size, hand_size)`.
pub fn joint_probability(
    pool: &CardPool,
    hand_size: u32,
    bounds: &DrawBounds,
) -> Result<BigRational, DrawError> {
    validate_pool(pool, hand_size, bounds)?;
    let favorable = constrained_hands(pool, hand_size, bounds);
    let possible = binomial(i64::from(pool.deck_size()), i64::from(hand_size));
    Ok(hand_ratio(favorable, possible))
}

#[cfg(test)]
mod tests {
    use super::{joint_count, joint_probability};
    use crate::combin::binomial;
    use crate::model::bounds::DrawBounds;
    use crate::model::pool::CardPool;
    use crate::prob::DrawError;
    use num_bigint::{BigInt, BigUint};
    use num_rational::BigRational;
    use num_traits::{One, Zero};

    #[test]
    fn burn_opener_matches_reference_count() {
        // 25 mountains, 4 searing spears, 31 other cards; a 7-card hand with
        // at least two mountains and at least one spear.
        let pool = CardPool::new(vec![25, 4, 31]);
        let bounds = DrawBounds::at_least(&[2, 1]);
        assert_eq!(
            joint_count(&pool, 7, &bounds).unwrap(),
            BigUint::from(128_022_600u32)
        );
        assert_eq!(
            joint_probability(&pool, 7, &bounds).unwrap(),
            BigRational::new(BigInt::from(1_066_855), BigInt::from(3_218_391))
        );
    }

    #[test]
    fn unconstrained_count_recovers_plain_hand_count() {
        let pool = CardPool::new(vec![25, 4, 31]);
        let bounds = DrawBounds::unconstrained();
        assert_eq!(joint_count(&pool, 7, &bounds).unwrap(), binomial(60, 7));
        assert_eq!(
            joint_probability(&pool, 7, &bounds).unwrap(),
            BigRational::one()
        );
    }

    #[test]
    fn maximum_constraint_excludes_heavy_hands() {
        let pool = CardPool::new(vec![3, 2, 5]);
        let bounds = DrawBounds::unconstrained().with_max(1, 1);
        assert_eq!(
            joint_count(&pool, 4, &bounds).unwrap(),
            BigUint::from(182u32)
        );
        assert_eq!(
            joint_probability(&pool, 4, &bounds).unwrap(),
            BigRational::new(BigInt::from(13), BigInt::from(15))
        );
    }

    #[test]
    fn infeasible_bounds_count_zero_without_failing() {
        let pool = CardPool::new(vec![5, 5]);
        let bounds = DrawBounds::at_least(&[3]).with_max(0, 2);
        assert_eq!(joint_count(&pool, 4, &bounds).unwrap(), BigUint::zero());
        assert_eq!(
            joint_probability(&pool, 4, &bounds).unwrap(),
            BigRational::zero()
        );
    }

    #[test]
    fn minimums_beyond_hand_size_count_zero() {
        let pool = CardPool::new(vec![5, 5]);
        let bounds = DrawBounds::at_least(&[2, 2]);
        assert_eq!(joint_count(&pool, 2, &bounds).unwrap(), BigUint::zero());
    }

    #[test]
    fn oversized_hand_is_rejected() {
        let pool = CardPool::new(vec![2, 2]);
        assert!(matches!(
            joint_count(&pool, 5, &DrawBounds::unconstrained()),
            Err(DrawError::HandExceedsDeck {
                hand_size: 5,
                deck_size: 4
            })
        ));
    }

    #[test]
    fn excess_bound_entries_are_rejected() {
        let pool = CardPool::new(vec![4, 4]);
        let bounds = DrawBounds::at_least(&[1, 1, 1]);
        assert!(matches!(
            joint_probability(&pool, 3, &bounds),
            Err(DrawError::BoundsLongerThanPool {
                bounds_len: 3,
                type_count: 2
            })
        ));
    }

    #[test]
    fn zero_count_types_are_tolerated() {
        let pool = CardPool::new(vec![4, 0, 4]);
        let bounds = DrawBounds::unconstrained();
        assert_eq!(joint_count(&pool, 3, &bounds).unwrap(), binomial(8, 3));
    }

    #[test]
    fn empty_pool_admits_only_the_empty_hand() {
        let pool = CardPool::new(Vec::new());
        let bounds = DrawBounds::unconstrained();
        assert_eq!(joint_count(&pool, 0, &bounds).unwrap(), BigUint::one());
        assert!(matches!(
            joint_count(&pool, 1, &bounds),
            Err(DrawError::HandExceedsDeck { .. })
        ));
    }
}
