//! Single-type hypergeometric draw probabilities.

use crate::combin::binomial;
use num_bigint::BigUint;
use num_rational::BigRational;
use num_traits::Zero;
use std::fmt;

/// Errors rejected at the public probability operations.
///
/// Zero-probability outcomes are never reported through this type: an
/// out-of-range draw count or infeasible bounds are legitimate results and
/// come back as exact zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    HandExceedsDeck { hand_size: u32, deck_size: u32 },
    CopiesExceedDeck { copies: u32, deck_size: u32 },
    BoundsLongerThanPool { bounds_len: usize, type_count: usize },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::HandExceedsDeck {
                hand_size,
                deck_size,
            } => {
                write!(f, "hand of {hand_size} cannot be drawn from a deck of {deck_size}")
            }
            DrawError::CopiesExceedDeck { copies, deck_size } => {
                write!(f, "{copies} copies cannot exist in a deck of {deck_size}")
            }
            DrawError::BoundsLongerThanPool {
                bounds_len,
                type_count,
            } => {
                write!(f, "{bounds_len} bound entries given for {type_count} card types")
            }
        }
    }
}

impl std::error::Error for DrawError {}

fn validate_deck(deck_size: u32, hand_size: u32, copies: u32) -> Result<(), DrawError> {
    if hand_size > deck_size {
        return Err(DrawError::HandExceedsDeck {
            hand_size,
            deck_size,
        });
    }
    if copies > deck_size {
        return Err(DrawError::CopiesExceedDeck { copies, deck_size });
    }
    Ok(())
}

/// Numerator and denominator are exact integers; the division happens once,
/// at the end, as a reduced rational.
pub(super) fn hand_ratio(favorable: BigUint, possible: BigUint) -> BigRational {
    BigRational::new(favorable.into(), possible.into())
}

fn exact_mass(deck_size: u32, hand_size: u32, copies: u32, drawn: u32) -> BigRational {
    let hits = binomial(i64::from(copies), i64::from(drawn));
    let misses = binomial(
        i64::from(deck_size) - i64::from(copies),
        i64::from(hand_size) - i64::from(drawn),
    );
    let hands = binomial(i64::from(deck_size), i64::from(hand_size));
    hand_ratio(hits * misses, hands)
}

/// Probability that exactly `drawn` of `copies` identical cards land in a
/// hand of `hand_size` drawn without replacement from `deck_size` cards.
///
/// A `drawn` outside `0..=min(copies, hand_size)` is an exact zero, not an
/// error; both binomial factors vanish on out-of-range arguments, including
/// the signed `hand_size - drawn` term.
pub fn exact_draw(
    deck_size: u32,
    hand_size: u32,
    copies: u32,
    drawn: u32,
) -> Result<BigRational, DrawError> {
    validate_deck(deck_size, hand_size, copies)?;
    Ok(exact_mass(deck_size, hand_size, copies, drawn))
}

/// Probability that at least `threshold` of `copies` identical cards land in
/// the hand: the upper tail of [`exact_draw`] over
/// `threshold..=min(copies, hand_size)`.
pub fn at_least_draw(
    deck_size: u32,
    hand_size: u32,
    copies: u32,
    threshold: u32,
) -> Result<BigRational, DrawError> {
    validate_deck(deck_size, hand_size, copies)?;

    let cap = copies.min(hand_size);
    let mut mass = BigRational::zero();
    for drawn in threshold..=cap {
        mass += exact_mass(deck_size, hand_size, copies, drawn);
    }
    Ok(mass)
}
