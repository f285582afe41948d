//! Validated multi-hop swap route.

use core::ops::Deref;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// An ordered chain of assets from `path[0]` to `path[last]`.
///
/// Holds at least two assets and no two consecutive entries are equal.
/// Dereferences to `[AssetId]`, so it can be passed wherever the router
/// expects a slice.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::{AssetId, Path};
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
///
/// let path = Path::new(vec![a, b]).expect("valid route");
/// assert_eq!(path.hops(), 1);
/// assert!(Path::new(vec![a]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<AssetId>", into = "Vec<AssetId>")]
pub struct Path(Vec<AssetId>);

impl Path {
    /// Creates a path.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if fewer than two assets are given.
    /// - [`AmmError::IdenticalAssets`] if two consecutive assets are equal.
    pub fn new(assets: Vec<AssetId>) -> Result<Self, AmmError> {
        if assets.len() < 2 {
            return Err(AmmError::InvalidPath);
        }
        if assets.windows(2).any(|w| w[0] == w[1]) {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self(assets))
    }

    /// Number of pools traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    /// First asset of the route.
    #[must_use]
    pub fn source(&self) -> AssetId {
        self.0[0]
    }

    /// Last asset of the route.
    #[must_use]
    pub fn destination(&self) -> AssetId {
        self.0[self.0.len() - 1]
    }
}

impl Deref for Path {
    type Target = [AssetId];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<AssetId>> for Path {
    type Error = AmmError;

    fn try_from(assets: Vec<AssetId>) -> Result<Self, Self::Error> {
        Self::new(assets)
    }
}

impl From<Path> for Vec<AssetId> {
    fn from(path: Path) -> Self {
        path.0
    }
}
