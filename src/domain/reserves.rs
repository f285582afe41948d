//! Pool balances in caller-requested order.

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// The two balances of a pool, ordered to match the `(asset_a, asset_b)`
/// order a caller asked for rather than the pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Reserves {
    /// Creates a reserve pair.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Balance of the first requested asset.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Balance of the second requested asset.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the same balances with the two sides swapped.
    pub const fn flipped(self) -> Self {
        Self::new(self.reserve_b, self.reserve_a)
    }

    /// Ensures both sides hold a balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if either side is zero.
    pub fn ensure_liquid(&self) -> Result<(), AmmError> {
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(())
    }
}

impl From<(Amount, Amount)> for Reserves {
    fn from((reserve_a, reserve_b): (Amount, Amount)) -> Self {
        Self::new(reserve_a, reserve_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_swaps_sides() {
        let r = Reserves::new(Amount::new(1), Amount::new(2)).flipped();
        assert_eq!(r.reserve_a(), Amount::new(2));
        assert_eq!(r.reserve_b(), Amount::new(1));
    }

    #[test]
    fn liquidity_check() {
        assert!(Reserves::new(Amount::new(1), Amount::new(1))
            .ensure_liquid()
            .is_ok());
        assert_eq!(
            Reserves::new(Amount::ZERO, Amount::new(1)).ensure_liquid(),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            Reserves::new(Amount::new(1), Amount::ZERO).ensure_liquid(),
            Err(AmmError::InsufficientLiquidity)
        );
    }
}
