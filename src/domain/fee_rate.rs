//! Per-pool swap fees on a thousandths scale.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Denominator of the fee scale (1000 = 100%).
pub const FEE_DENOMINATOR: u16 = 1_000;

/// A fee expressed in thousandths of the traded amount.
///
/// `30` means 3%. Valid values are `0..=1000`; construction rejects
/// anything larger.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::FeeRate;
///
/// let rate = FeeRate::new(30).expect("in range");
/// assert_eq!(rate.get(), 30);
/// assert!(FeeRate::new(1_001).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct FeeRate(u16);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// Creates a fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `thousandths > 1000`.
    pub const fn new(thousandths: u16) -> Result<Self, AmmError> {
        if thousandths > FEE_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee rate exceeds 1000 thousandths"));
        }
        Ok(Self(thousandths))
    }

    /// Returns the rate in thousandths.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for FeeRate {
    type Error = AmmError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeRate> for u16 {
    fn from(rate: FeeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}‰", self.0)
    }
}

/// Fee configuration of a single pool as reported by its registry.
///
/// Only a fee charged "in token" reduces the swap input; a pool without
/// one trades at the full `1000 / 1000` rate. Modelling this as an enum
/// makes "rate set but not applied" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PoolFee {
    /// No deduction.
    #[default]
    NoFee,
    /// The given rate is retained by the pool.
    FeeInToken(FeeRate),
}

impl PoolFee {
    /// Returns the rate deducted on swaps (zero for [`PoolFee::NoFee`]).
    #[must_use]
    pub const fn rate(&self) -> FeeRate {
        match self {
            Self::NoFee => FeeRate::ZERO,
            Self::FeeInToken(rate) => *rate,
        }
    }

    /// Returns `1000 - rate`, the share of the input that is priced.
    pub const fn effective_rate(&self) -> Amount {
        Amount::new((FEE_DENOMINATOR - self.rate().get()) as u128)
    }
}

impl fmt::Display for PoolFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFee => write!(f, "no fee"),
            Self::FeeInToken(rate) => write!(f, "{rate} in token"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        assert!(FeeRate::new(0).is_ok());
        assert!(FeeRate::new(1_000).is_ok());
        assert_eq!(
            FeeRate::new(1_001),
            Err(AmmError::InvalidFee("fee rate exceeds 1000 thousandths"))
        );
    }

    #[test]
    fn effective_rate() {
        let Ok(rate) = FeeRate::new(30) else {
            panic!("expected Ok");
        };
        assert_eq!(PoolFee::NoFee.effective_rate(), Amount::new(1_000));
        assert_eq!(PoolFee::FeeInToken(rate).effective_rate(), Amount::new(970));
        assert_eq!(
            PoolFee::FeeInToken(FeeRate::ZERO).effective_rate(),
            Amount::new(1_000)
        );
    }

    #[test]
    fn default_is_no_fee() {
        assert_eq!(PoolFee::default(), PoolFee::NoFee);
        assert_eq!(PoolFee::default().rate(), FeeRate::ZERO);
    }

    #[test]
    fn display() {
        let Ok(rate) = FeeRate::new(3) else {
            panic!("expected Ok");
        };
        assert_eq!(PoolFee::FeeInToken(rate).to_string(), "3‰ in token");
        assert_eq!(PoolFee::NoFee.to_string(), "no fee");
    }

    #[test]
    fn serde_validates_range() {
        let Ok(fee) = serde_json::from_str::<PoolFee>(r#"{"FeeInToken":25}"#) else {
            panic!("expected valid fee");
        };
        assert_eq!(fee.rate().get(), 25);
        assert!(serde_json::from_str::<PoolFee>(r#"{"FeeInToken":2000}"#).is_err());
        let Ok(none) = serde_json::from_str::<PoolFee>(r#""NoFee""#) else {
            panic!("expected NoFee");
        };
        assert_eq!(none, PoolFee::NoFee);
    }
}
