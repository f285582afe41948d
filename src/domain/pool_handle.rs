//! Derived pool identifier.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// The identifier of the pool servicing one asset pair.
///
/// Handles are computed by
/// [`derive_pool`](crate::pricing::derive_pool), never stored by the
/// engine. Two derivations for the same pair and registry are always equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolHandle(Address);

impl PoolHandle {
    /// Creates a handle from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Wraps an address.
    #[must_use]
    pub const fn from_address(address: Address) -> Self {
        Self(address)
    }

    /// Returns the pool address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
