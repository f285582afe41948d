//! Declarative blueprint of a whole registry.

use std::collections::HashSet;

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use super::PoolConfig;
use crate::error::AmmError;

/// Registry identity plus the pools it hosts.
///
/// This is the input to
/// [`InMemoryRegistry::from_config`](crate::registry::InMemoryRegistry::from_config)
/// and can be loaded from any `serde` format.
///
/// # Validation
///
/// - The registry address must be non-zero.
/// - Every pool must have two distinct, non-zero assets.
/// - No asset pair may appear twice (in either order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    address: Address,
    pool_code_fingerprint: B256,
    #[serde(default)]
    pools: Vec<PoolConfig>,
}

impl RegistryConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns whatever [`validate`](Self::validate) reports.
    pub fn new(
        address: Address,
        pool_code_fingerprint: B256,
        pools: Vec<PoolConfig>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            address,
            pool_code_fingerprint,
            pools,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for a zero registry address or
    ///   a duplicated pair.
    /// - Canonicalization errors from any [`PoolConfig`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.address == Address::ZERO {
            return Err(AmmError::InvalidConfiguration(
                "registry address must be non-zero",
            ));
        }
        let mut seen = HashSet::with_capacity(self.pools.len());
        for pool in &self.pools {
            if !seen.insert(pool.pair()?) {
                return Err(AmmError::InvalidConfiguration("duplicate pool for pair"));
            }
        }
        Ok(())
    }

    /// Registry address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Pool code fingerprint.
    #[must_use]
    pub const fn pool_code_fingerprint(&self) -> B256 {
        self.pool_code_fingerprint
    }

    /// Pools hosted by the registry.
    #[must_use]
    pub fn pools(&self) -> &[PoolConfig] {
        &self.pools
    }
}
