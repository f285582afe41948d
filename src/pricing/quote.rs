//! Fee-free proportional quote.

use crate::domain::{Amount, Reserves};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Amount of asset B equivalent to `amount_a` at the pool's current ratio.
///
/// `floor(amount_a × reserve_b / reserve_a)`. No fee and no price impact:
/// this preserves the ratio when adding or removing liquidity
/// proportionally and must not be used to price trades.
///
/// # Errors
///
/// - [`AmmError::InsufficientAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if `amount_a × reserve_b` exceeds
///   256 bits.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::Amount;
/// use hydra_router::pricing::quote;
///
/// let b = quote(Amount::new(1), Amount::new(100), Amount::new(200));
/// assert_eq!(b, Ok(Amount::new(2)));
/// ```
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientAmount);
    }
    Reserves::new(reserve_a, reserve_b).ensure_liquid()?;

    amount_a
        .safe_mul(&reserve_b, "quote numerator overflow")?
        .safe_div(&reserve_a)
}
