//! Read-only capabilities the engine consumes from its host ledger.
//!
//! The pricing functions never reach for global state. Instead every
//! operation takes a registry value implementing the traits below, which
//! keeps the engine free of process-wide singletons and lets tests run
//! against fixed in-memory fixtures.
//!
//! # Two collaborators
//!
//! | Trait | Ledger counterpart | Used by |
//! |-------|--------------------|---------|
//! | [`PoolRegistry`] | pool factory | address derivation, fee lookup |
//! | [`ReserveSource`] | pool contracts | reserve reads |
//!
//! Fee lookup is a two-step process: derive the handle with
//! [`derive_pool`](crate::pricing::derive_pool), then ask the registry for
//! that handle's [`PoolFee`].

use alloy_primitives::{Address, B256};

use crate::domain::{Amount, PoolFee, PoolHandle};
use crate::error::AmmError;

/// The registry (factory) that owns every pool of one deployment.
///
/// Implementations must be read-only from the engine's point of view and
/// return the same answer for the same handle within one top-level call.
pub trait PoolRegistry {
    /// Address of the registry itself; the deployer in pool derivation.
    #[must_use]
    fn address(&self) -> Address;

    /// Fixed fingerprint (init code hash) of the pool bytecode.
    ///
    /// Constant for the lifetime of a registry instance.
    #[must_use]
    fn pool_code_fingerprint(&self) -> B256;

    /// Fee configuration of the pool at `pool`.
    ///
    /// Pools without an explicit override report [`PoolFee::NoFee`].
    ///
    /// # Errors
    ///
    /// Implementations backed by fallible I/O may surface their own
    /// failures; the in-memory registry never fails.
    fn pool_fee(&self, pool: &PoolHandle) -> Result<PoolFee, AmmError>;
}

/// Source of pool balances.
pub trait ReserveSource {
    /// Current balances of `pool` in canonical `(token0, token1)` order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool lives at `pool`.
    fn reserves(&self, pool: &PoolHandle) -> Result<(Amount, Amount), AmmError>;
}

impl<T: PoolRegistry + ?Sized> PoolRegistry for &T {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn pool_code_fingerprint(&self) -> B256 {
        (**self).pool_code_fingerprint()
    }

    fn pool_fee(&self, pool: &PoolHandle) -> Result<PoolFee, AmmError> {
        (**self).pool_fee(pool)
    }
}

impl<T: ReserveSource + ?Sized> ReserveSource for &T {
    fn reserves(&self, pool: &PoolHandle) -> Result<(Amount, Amount), AmmError> {
        (**self).reserves(pool)
    }
}
