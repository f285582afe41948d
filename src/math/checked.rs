//! Checked arithmetic returning typed errors.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning operations on
//! [`Amount`] into `Result`s with an [`AmmError`] naming the step that
//! failed, so the swap formulas can be written as a chain of `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_router::domain::Amount;
//! use hydra_router::math::CheckedArithmetic;
//!
//! let out = Amount::new(2_000)
//!     .safe_mul(&Amount::new(100), "numerator")
//!     .and_then(|n| n.safe_div(&Amount::new(102_000)));
//! assert_eq!(out, Ok(Amount::new(1)));
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No wrapping or saturation**: overflow is reported, never hidden.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] tagged with `context`.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] tagged with `context` if
    /// the result would be negative.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] tagged with `context`.
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked floor division.
    ///
    /// Callers that round a required input up add one to the floored
    /// quotient themselves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero. The pricing
    /// functions prove their divisors positive first, so they never
    /// surface this variant.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_mul(other).ok_or(AmmError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_div(other).ok_or(AmmError::DivisionByZero)
    }
}
