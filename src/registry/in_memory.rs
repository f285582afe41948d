//! Fixed in-memory registry implementing both collaborator traits.

use std::collections::HashMap;

use alloy_primitives::{Address, B256};
use tracing::debug;

use crate::config::{PoolConfig, RegistryConfig};
use crate::domain::{Amount, PoolFee, PoolHandle};
use crate::error::AmmError;
use crate::pricing::pool_address;
use crate::traits::{PoolRegistry, ReserveSource};

/// A registry whose pools, balances and fees are fixed at construction.
///
/// Pools are keyed by the handle [`derive_pool`](crate::pricing::derive_pool)
/// would compute, so lookups made by the pricing functions land on the
/// configured entries. The value is immutable once built and is
/// `Send + Sync`, so one instance can serve concurrent quote requests.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, B256};
/// use hydra_router::config::{PoolConfig, RegistryConfig};
/// use hydra_router::domain::{Amount, AssetId, PoolFee};
/// use hydra_router::pricing::get_reserves;
/// use hydra_router::registry::InMemoryRegistry;
///
/// let usdc = AssetId::from_bytes([1u8; 20]);
/// let weth = AssetId::from_bytes([2u8; 20]);
/// let config = RegistryConfig::new(
///     Address::repeat_byte(0xfa),
///     B256::repeat_byte(0x11),
///     vec![PoolConfig::new(usdc, weth, Amount::new(3_000), Amount::new(1), PoolFee::NoFee)],
/// )
/// .expect("valid config");
///
/// let registry = InMemoryRegistry::from_config(&config).expect("registry built");
/// let reserves = get_reserves(&registry, weth, usdc).expect("pool exists");
/// assert_eq!(reserves.reserve_a(), Amount::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryRegistry {
    address: Address,
    pool_code_fingerprint: B256,
    reserves: HashMap<PoolHandle, (Amount, Amount)>,
    fees: HashMap<PoolHandle, PoolFee>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(address: Address, pool_code_fingerprint: B256) -> Self {
        Self {
            address,
            pool_code_fingerprint,
            reserves: HashMap::new(),
            fees: HashMap::new(),
        }
    }

    /// Builds a registry from a validated blueprint.
    ///
    /// # Errors
    ///
    /// Returns whatever [`RegistryConfig::validate`] reports.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let mut registry = Self::new(config.address(), config.pool_code_fingerprint());
        for pool in config.pools() {
            registry.insert_pool(pool)?;
        }
        debug!(
            registry = %registry.address,
            pools = registry.reserves.len(),
            "built in-memory registry"
        );
        Ok(registry)
    }

    /// Adds (or replaces) one pool.
    ///
    /// # Errors
    ///
    /// Propagates canonicalization errors from the pool's asset pair.
    pub fn with_pool(mut self, pool: &PoolConfig) -> Result<Self, AmmError> {
        self.insert_pool(pool)?;
        Ok(self)
    }

    fn insert_pool(&mut self, pool: &PoolConfig) -> Result<PoolHandle, AmmError> {
        let pair = pool.pair()?;
        let handle = pool_address(self.address, self.pool_code_fingerprint, &pair);
        self.reserves.insert(handle, pool.canonical_reserves()?);
        if pool.fee() == PoolFee::NoFee {
            self.fees.remove(&handle);
        } else {
            self.fees.insert(handle, pool.fee());
        }
        Ok(handle)
    }

    /// Number of pools held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reserves.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }
}

impl PoolRegistry for InMemoryRegistry {
    fn address(&self) -> Address {
        self.address
    }

    fn pool_code_fingerprint(&self) -> B256 {
        self.pool_code_fingerprint
    }

    fn pool_fee(&self, pool: &PoolHandle) -> Result<PoolFee, AmmError> {
        Ok(self.fees.get(pool).copied().unwrap_or_default())
    }
}

impl ReserveSource for InMemoryRegistry {
    fn reserves(&self, pool: &PoolHandle) -> Result<(Amount, Amount), AmmError> {
        self.reserves
            .get(pool)
            .copied()
            .ok_or(AmmError::PoolNotFound(*pool))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, AssetPair, FeeRate};

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 20])
    }

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new(Address::repeat_byte(0xfa), B256::repeat_byte(0x11))
    }

    fn handle_for(reg: &InMemoryRegistry, a: u8, b: u8) -> PoolHandle {
        let Ok(pair) = AssetPair::new(asset(a), asset(b)) else {
            panic!("valid pair");
        };
        pool_address(reg.address(), reg.pool_code_fingerprint(), &pair)
    }

    #[test]
    fn unknown_pool_not_found() {
        let reg = registry();
        let handle = handle_for(&reg, 1, 2);
        assert_eq!(reg.reserves(&handle), Err(AmmError::PoolNotFound(handle)));
        assert!(reg.is_empty());
    }

    #[test]
    fn unconfigured_fee_defaults_to_none() {
        let reg = registry();
        let handle = handle_for(&reg, 1, 2);
        assert_eq!(reg.pool_fee(&handle), Ok(PoolFee::NoFee));
    }

    #[test]
    fn reserves_stored_in_canonical_order() {
        let pool = PoolConfig::new(
            asset(2),
            asset(1),
            Amount::new(20),
            Amount::new(10),
            PoolFee::NoFee,
        );
        let Ok(reg) = registry().with_pool(&pool) else {
            panic!("expected Ok");
        };
        let handle = handle_for(&reg, 1, 2);
        assert_eq!(reg.reserves(&handle), Ok((Amount::new(10), Amount::new(20))));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn fee_is_stored_per_pool() {
        let Ok(rate) = FeeRate::new(3) else {
            panic!("valid fee");
        };
        let charged = PoolConfig::new(
            asset(1),
            asset(2),
            Amount::new(1),
            Amount::new(1),
            PoolFee::FeeInToken(rate),
        );
        let free = PoolConfig::new(
            asset(2),
            asset(3),
            Amount::new(1),
            Amount::new(1),
            PoolFee::NoFee,
        );
        let Ok(reg) = registry().with_pool(&charged).and_then(|r| r.with_pool(&free)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            reg.pool_fee(&handle_for(&reg, 2, 1)),
            Ok(PoolFee::FeeInToken(rate))
        );
        assert_eq!(reg.pool_fee(&handle_for(&reg, 3, 2)), Ok(PoolFee::NoFee));
    }

    #[test]
    fn from_config_rejects_invalid() {
        // bypass RegistryConfig::new validation through serde
        let json = format!(
            r#"{{"address":"{}","pool_code_fingerprint":"{}","pools":[]}}"#,
            Address::ZERO,
            B256::ZERO
        );
        let Ok(cfg) = serde_json::from_str::<RegistryConfig>(&json) else {
            panic!("expected json to parse");
        };
        assert!(matches!(
            InMemoryRegistry::from_config(&cfg),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryRegistry>();
    }
}
