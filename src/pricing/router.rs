//! Multi-hop amount propagation along a path of pools.

use tracing::debug;

use crate::domain::{Amount, AssetId, Path, SwapSpec};
use crate::error::AmmError;
use crate::traits::{PoolRegistry, ReserveSource};

use super::reserves::get_reserves;
use super::swap::{get_amount_in, get_amount_out};

fn ensure_routable(path: &[AssetId]) -> Result<(), AmmError> {
    if path.len() < 2 {
        return Err(AmmError::InvalidPath);
    }
    Ok(())
}

/// Amounts flowing through `path` when selling exactly `amount_in` of
/// `path[0]`.
///
/// Element `i` of the result is the amount of `path[i]`; the first element
/// is `amount_in` and the last is the final output.
///
/// # Errors
///
/// - [`AmmError::InvalidPath`] if `path` has fewer than two assets.
/// - The first failure of any hop (reserve read or swap math). No partial
///   result is returned.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use hydra_router::config::PoolConfig;
/// use hydra_router::domain::{Amount, AssetId, PoolFee};
/// use hydra_router::pricing::get_amounts_out;
/// use hydra_router::registry::InMemoryRegistry;
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
/// let pool = PoolConfig::new(a, b, Amount::new(10_000), Amount::new(10_000), PoolFee::NoFee);
/// let registry = InMemoryRegistry::new(Address::repeat_byte(1), B256::ZERO)
///     .with_pool(&pool)
///     .expect("valid pool");
///
/// let amounts = get_amounts_out(&registry, Amount::new(2), &[a, b]).expect("routable");
/// assert_eq!(amounts, vec![Amount::new(2), Amount::new(1)]);
/// ```
pub fn get_amounts_out<R>(
    registry: &R,
    amount_in: Amount,
    path: &[AssetId],
) -> Result<Vec<Amount>, AmmError>
where
    R: PoolRegistry + ReserveSource + ?Sized,
{
    ensure_routable(path)?;

    let mut amounts = Vec::with_capacity(path.len());
    amounts.push(amount_in);
    for (hop, pair) in path.windows(2).enumerate() {
        let (token_in, token_out) = (pair[0], pair[1]);
        let reserves = get_reserves(registry, token_in, token_out)?;
        let amount_out = get_amount_out(
            registry,
            amounts[hop],
            reserves.reserve_a(),
            reserves.reserve_b(),
            token_in,
            token_out,
        )?;
        debug!(
            hop,
            %token_in,
            %token_out,
            amount_in = %amounts[hop],
            %amount_out,
            "forward hop"
        );
        amounts.push(amount_out);
    }
    Ok(amounts)
}

/// Amounts flowing through `path` when buying exactly `amount_out` of the
/// last asset.
///
/// Element `i` of the result is the amount of `path[i]`; the last element
/// is `amount_out` and the first is the required input.
///
/// # Errors
///
/// - [`AmmError::InvalidPath`] if `path` has fewer than two assets.
/// - The first failure of any hop, walking from the end of the path.
pub fn get_amounts_in<R>(
    registry: &R,
    amount_out: Amount,
    path: &[AssetId],
) -> Result<Vec<Amount>, AmmError>
where
    R: PoolRegistry + ReserveSource + ?Sized,
{
    ensure_routable(path)?;

    let mut amounts = vec![Amount::ZERO; path.len()];
    let last = path.len() - 1;
    amounts[last] = amount_out;
    for hop in (1..=last).rev() {
        let (token_in, token_out) = (path[hop - 1], path[hop]);
        let reserves = get_reserves(registry, token_in, token_out)?;
        let amount_in = get_amount_in(
            registry,
            amounts[hop],
            reserves.reserve_a(),
            reserves.reserve_b(),
            token_in,
            token_out,
        )?;
        debug!(
            hop = hop - 1,
            %token_in,
            %token_out,
            %amount_in,
            amount_out = %amounts[hop],
            "backward hop"
        );
        amounts[hop - 1] = amount_in;
    }
    Ok(amounts)
}

/// Dispatches a [`SwapSpec`] along a validated [`Path`] to
/// [`get_amounts_out`] or [`get_amounts_in`].
///
/// # Errors
///
/// Those of the selected direction. Path shape errors cannot occur here,
/// [`Path::new`] has already rejected them.
pub fn get_amounts<R>(registry: &R, spec: SwapSpec, path: &Path) -> Result<Vec<Amount>, AmmError>
where
    R: PoolRegistry + ReserveSource + ?Sized,
{
    debug!(
        %spec,
        hops = path.hops(),
        source = %path.source(),
        destination = %path.destination(),
        "routing"
    );
    match spec {
        SwapSpec::ExactIn { amount_in } => get_amounts_out(registry, amount_in, path),
        SwapSpec::ExactOut { amount_out } => get_amounts_in(registry, amount_out, path),
    }
}
