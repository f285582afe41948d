//! Reserve lookup in caller-requested order.

use crate::domain::{AssetId, Reserves};
use crate::error::AmmError;
use crate::traits::{PoolRegistry, ReserveSource};

use super::pool_address::derive_pool;

/// Reads the balances of the `(asset_a, asset_b)` pool and orders them so
/// that [`Reserves::reserve_a`] belongs to `asset_a`.
///
/// Performs exactly one read on the [`ReserveSource`].
///
/// # Errors
///
/// - Canonicalization failures ([`AmmError::IdenticalAssets`],
///   [`AmmError::ZeroAsset`]).
/// - Any failure of the reserve source, e.g. [`AmmError::PoolNotFound`].
pub fn get_reserves<R>(
    registry: &R,
    asset_a: AssetId,
    asset_b: AssetId,
) -> Result<Reserves, AmmError>
where
    R: PoolRegistry + ReserveSource + ?Sized,
{
    let handle = derive_pool(registry, asset_a, asset_b)?;
    let canonical = Reserves::from(registry.reserves(&handle)?);
    if asset_a < asset_b {
        Ok(canonical)
    } else {
        Ok(canonical.flipped())
    }
}
