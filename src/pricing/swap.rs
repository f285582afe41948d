//! Constant-product swap math with per-pool fees.
//!
//! The invariant is `x · y = k`. The pool's fee is applied to the input on
//! a thousandths scale before the curve is evaluated:
//!
//! ```text
//! forward:  in_with_fee = amount_in × (1000 − fee)
//!           amount_out  = ⌊ in_with_fee × reserve_out / (reserve_in × 1000 + in_with_fee) ⌋
//!
//! inverse:  amount_in   = ⌊ reserve_in × amount_out × 1000 / ((reserve_out − amount_out) × (1000 − fee)) ⌋ + 1
//! ```
//!
//! Both directions round in the pool's favour: outputs down, required
//! inputs up. The inverse may ask for one unit more than the strict
//! minimum; it never asks for less.
//!
//! [`amount_out_for`] / [`amount_in_for`] take the fee explicitly.
//! [`get_amount_out`] / [`get_amount_in`] first locate the pool with
//! [`derive_pool`] and then ask the registry for its fee.

use crate::domain::{Amount, AssetId, PoolFee, Reserves, FEE_DENOMINATOR};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::PoolRegistry;

use super::pool_address::derive_pool;

const FEE_SCALE: Amount = Amount::new(FEE_DENOMINATOR as u128);

fn ensure_forward(amount_in: Amount, reserves: Reserves) -> Result<(), AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    reserves.ensure_liquid()
}

fn ensure_inverse(amount_out: Amount, reserves: Reserves) -> Result<(), AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    reserves.ensure_liquid()?;
    if amount_out >= reserves.reserve_b() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(())
}

/// Looks up the fee of the `(token_a, token_b)` pool.
///
/// Two explicit steps: derive the handle, then query the registry.
///
/// # Errors
///
/// Canonicalization failures and registry failures.
pub fn lookup_fee<R>(registry: &R, token_a: AssetId, token_b: AssetId) -> Result<PoolFee, AmmError>
where
    R: PoolRegistry + ?Sized,
{
    let handle = derive_pool(registry, token_a, token_b)?;
    registry.pool_fee(&handle)
}

/// Output received for selling exactly `amount_in`, given the pool fee.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::ArithmeticOverflow`] if an intermediate product exceeds
///   256 bits.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{Amount, PoolFee};
/// use hydra_router::pricing::amount_out_for;
///
/// let out = amount_out_for(Amount::new(2), Amount::new(100), Amount::new(100), PoolFee::NoFee);
/// assert_eq!(out, Ok(Amount::new(1)));
/// ```
pub fn amount_out_for(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: PoolFee,
) -> Result<Amount, AmmError> {
    ensure_forward(amount_in, Reserves::new(reserve_in, reserve_out))?;

    let amount_in_with_fee =
        amount_in.safe_mul(&fee.effective_rate(), "fee-adjusted input overflow")?;
    let numerator = amount_in_with_fee.safe_mul(&reserve_out, "amount-out numerator overflow")?;
    let denominator = reserve_in
        .safe_mul(&FEE_SCALE, "amount-out denominator overflow")?
        .safe_add(&amount_in_with_fee, "amount-out denominator overflow")?;

    numerator.safe_div(&denominator)
}

/// Input required to receive exactly `amount_out`, given the pool fee.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::InvalidFee`] for a 100% fee, which no input can satisfy.
/// - [`AmmError::ArithmeticOverflow`] if an intermediate product exceeds
///   256 bits.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{Amount, PoolFee};
/// use hydra_router::pricing::amount_in_for;
///
/// let needed = amount_in_for(Amount::new(1), Amount::new(100), Amount::new(100), PoolFee::NoFee);
/// assert_eq!(needed, Ok(Amount::new(2)));
/// ```
pub fn amount_in_for(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: PoolFee,
) -> Result<Amount, AmmError> {
    ensure_inverse(amount_out, Reserves::new(reserve_in, reserve_out))?;

    let effective_rate = fee.effective_rate();
    if effective_rate.is_zero() {
        return Err(AmmError::InvalidFee("100% fee makes swap impossible"));
    }

    let numerator = reserve_in
        .safe_mul(&amount_out, "amount-in numerator overflow")?
        .safe_mul(&FEE_SCALE, "amount-in numerator overflow")?;
    let denominator = reserve_out
        .safe_sub(&amount_out, "amount-in denominator underflow")?
        .safe_mul(&effective_rate, "amount-in denominator overflow")?;

    numerator
        .safe_div(&denominator)?
        .safe_add(&Amount::new(1), "amount-in round-up overflow")
}

/// Output received for selling `amount_in` of `token_in` into the
/// `token_in → token_out` pool, using the fee the registry reports for it.
///
/// Argument checks run before the fee lookup, so invalid amounts or empty
/// reserves fail without touching the registry.
///
/// # Errors
///
/// Those of [`amount_out_for`], plus canonicalization and registry
/// failures from the fee lookup.
pub fn get_amount_out<R>(
    registry: &R,
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    token_in: AssetId,
    token_out: AssetId,
) -> Result<Amount, AmmError>
where
    R: PoolRegistry + ?Sized,
{
    ensure_forward(amount_in, Reserves::new(reserve_in, reserve_out))?;
    let fee = lookup_fee(registry, token_in, token_out)?;
    amount_out_for(amount_in, reserve_in, reserve_out, fee)
}

/// Input of `token_in` required to receive `amount_out` of `token_out`,
/// using the fee the registry reports for their pool.
///
/// # Errors
///
/// Those of [`amount_in_for`], plus canonicalization and registry
/// failures from the fee lookup.
pub fn get_amount_in<R>(
    registry: &R,
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    token_in: AssetId,
    token_out: AssetId,
) -> Result<Amount, AmmError>
where
    R: PoolRegistry + ?Sized,
{
    ensure_inverse(amount_out, Reserves::new(reserve_in, reserve_out))?;
    let fee = lookup_fee(registry, token_in, token_out)?;
    amount_in_for(amount_out, reserve_in, reserve_out, fee)
}
