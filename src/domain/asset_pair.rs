//! Canonically ordered pair of distinct assets.

use super::AssetId;
use crate::error::AmmError;

/// An unordered pair of distinct assets stored in canonical order.
///
/// Construction guarantees `token0 < token1`, so `(A, B)` and `(B, A)`
/// produce the same value and therefore the same pool.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
///
/// let pair = AssetPair::new(b, a).expect("distinct, non-zero");
/// assert_eq!(pair.token0(), a);
/// assert_eq!(pair.token1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    token0: AssetId,
    token1: AssetId,
}

impl AssetPair {
    /// Orders `a` and `b` ascending.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `a == b`.
    /// - [`AmmError::ZeroAsset`] if the lower asset is [`AssetId::ZERO`].
    pub fn new(a: AssetId, b: AssetId) -> Result<Self, AmmError> {
        if a == b {
            return Err(AmmError::IdenticalAssets);
        }
        let (token0, token1) = if a < b { (a, b) } else { (b, a) };
        if token0.is_zero() {
            return Err(AmmError::ZeroAsset);
        }
        Ok(Self { token0, token1 })
    }

    /// Returns the lower-ordered asset.
    #[must_use]
    pub const fn token0(&self) -> AssetId {
        self.token0
    }

    /// Returns the higher-ordered asset.
    #[must_use]
    pub const fn token1(&self) -> AssetId {
        self.token1
    }

    /// Returns `true` if `asset` is `token0`, i.e. a caller asking for
    /// `asset` first already matches canonical order.
    #[must_use]
    pub fn is_token0(&self, asset: &AssetId) -> bool {
        self.token0 == *asset
    }

    /// Concatenation `token0 ‖ token1`, the pre-image of the pair salt.
    #[must_use]
    pub fn packed(&self) -> [u8; 40] {
        let mut buf = [0u8; 40];
        buf[..20].copy_from_slice(self.token0.as_slice());
        buf[20..].copy_from_slice(self.token1.as_slice());
        buf
    }
}
