//! Canonical pair ordering and deterministic pool address derivation.
//!
//! A pool's handle is computed, never looked up:
//!
//! ```text
//! salt   = keccak256(token0 ‖ token1)
//! handle = keccak256(0xff ‖ registry ‖ salt ‖ pool_code_fingerprint)[12..32]
//! ```
//!
//! This is the CREATE2 layout, so handles match the on-ledger address of
//! the pool contract the registry deployed for the pair.

use alloy_primitives::{keccak256, Address, B256};
use tracing::trace;

use crate::domain::{AssetId, AssetPair, PoolHandle};
use crate::error::AmmError;
use crate::traits::PoolRegistry;

const CREATE2_PREFIX: u8 = 0xff;

/// Orders two assets ascending.
///
/// Equivalent to [`AssetPair::new`]; exposed under the name callers of the
/// routing layer expect.
///
/// # Errors
///
/// - [`AmmError::IdenticalAssets`] if `a == b`.
/// - [`AmmError::ZeroAsset`] if the lower asset is the zero sentinel.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::AssetId;
/// use hydra_router::pricing::canonicalize;
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
/// assert_eq!(canonicalize(a, b), canonicalize(b, a));
/// ```
pub fn canonicalize(a: AssetId, b: AssetId) -> Result<AssetPair, AmmError> {
    AssetPair::new(a, b)
}

/// Computes the handle of the pool `registry` deploys for `pair`.
///
/// Pure: reads nothing but its arguments.
#[must_use]
pub fn pool_address(
    registry: Address,
    pool_code_fingerprint: B256,
    pair: &AssetPair,
) -> PoolHandle {
    let salt = keccak256(pair.packed());

    let mut preimage = [0u8; 85];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..21].copy_from_slice(registry.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..85].copy_from_slice(pool_code_fingerprint.as_slice());

    let hash = keccak256(preimage);
    PoolHandle::from_address(Address::from_slice(&hash[12..]))
}

/// Canonicalizes `(a, b)` and derives the handle of their pool.
///
/// Only the registry's constant identity (address and code fingerprint)
/// is consulted; no pool state is read.
///
/// # Errors
///
/// Propagates [`canonicalize`] failures.
pub fn derive_pool<R>(registry: &R, a: AssetId, b: AssetId) -> Result<PoolHandle, AmmError>
where
    R: PoolRegistry + ?Sized,
{
    let pair = canonicalize(a, b)?;
    let handle = pool_address(registry.address(), registry.pool_code_fingerprint(), &pair);
    trace!(token0 = %pair.token0(), token1 = %pair.token1(), pool = %handle, "derived pool");
    Ok(handle)
}
