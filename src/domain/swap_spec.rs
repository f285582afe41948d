//! Direction and fixed amount of a routed swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// What constraint drives a route computation: an exact input that is
/// propagated forward, or an exact output that is propagated backward.
///
/// # Invariants
///
/// The contained amount is always non-zero.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_out(Amount::new(1_000)).expect("non-zero");
/// assert_eq!(spec.to_string(), "ExactOut(1000)");
/// assert!(SwapSpec::exact_in(Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapSpec {
    /// The caller provides an exact input amount.
    ExactIn {
        /// The fixed input amount.
        amount_in: Amount,
    },
    /// The caller requests an exact output amount.
    ExactOut {
        /// The desired output amount.
        amount_out: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientInputAmount`] if `amount` is zero.
    pub fn exact_in(amount: Amount) -> Result<Self, AmmError> {
        if amount.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientOutputAmount`] if `amount` is zero.
    pub fn exact_out(amount: Amount) -> Result<Self, AmmError> {
        if amount.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        Ok(Self::ExactOut { amount_out: amount })
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
