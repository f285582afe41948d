//! Declarative description of one pool in a registry fixture.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, AssetId, AssetPair, PoolFee};
use crate::error::AmmError;

/// One pool: its two assets, their balances and its fee.
///
/// Reserves are given in the order of `token_a` / `token_b`, not in
/// canonical order; the registry reorders them when it is built. Empty
/// pools (zero reserves) are allowed: they exist but cannot be traded.
///
/// # Examples
///
/// ```
/// use hydra_router::config::PoolConfig;
/// use hydra_router::domain::{Amount, AssetId, PoolFee};
///
/// let cfg = PoolConfig::new(
///     AssetId::from_bytes([2u8; 20]),
///     AssetId::from_bytes([1u8; 20]),
///     Amount::new(500),
///     Amount::new(1_000),
///     PoolFee::NoFee,
/// );
/// assert!(cfg.validate().is_ok());
/// let (r0, r1) = cfg.canonical_reserves().expect("valid");
/// assert_eq!((r0, r1), (Amount::new(1_000), Amount::new(500)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    token_a: AssetId,
    token_b: AssetId,
    reserve_a: Amount,
    reserve_b: Amount,
    #[serde(default)]
    fee: PoolFee,
}

impl PoolConfig {
    /// Creates a pool description. Call [`validate`](Self::validate) or
    /// let the registry builder do it.
    pub const fn new(
        token_a: AssetId,
        token_b: AssetId,
        reserve_a: Amount,
        reserve_b: Amount,
        fee: PoolFee,
    ) -> Self {
        Self {
            token_a,
            token_b,
            reserve_a,
            reserve_b,
            fee,
        }
    }

    /// Validates the asset pair.
    ///
    /// # Errors
    ///
    /// Propagates [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAsset`]
    /// from canonicalization.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.pair().map(|_| ())
    }

    /// Canonical pair of this pool.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn pair(&self) -> Result<AssetPair, AmmError> {
        AssetPair::new(self.token_a, self.token_b)
    }

    /// Reserves reordered to canonical `(token0, token1)` order.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn canonical_reserves(&self) -> Result<(Amount, Amount), AmmError> {
        let pair = self.pair()?;
        if pair.is_token0(&self.token_a) {
            Ok((self.reserve_a, self.reserve_b))
        } else {
            Ok((self.reserve_b, self.reserve_a))
        }
    }

    /// First asset as written.
    #[must_use]
    pub const fn token_a(&self) -> AssetId {
        self.token_a
    }

    /// Second asset as written.
    #[must_use]
    pub const fn token_b(&self) -> AssetId {
        self.token_b
    }

    /// Fee configuration.
    #[must_use]
    pub const fn fee(&self) -> PoolFee {
        self.fee
    }
}
