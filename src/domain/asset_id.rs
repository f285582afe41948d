//! Ledger asset identifier.

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identifier of a fungible asset: its 20-byte contract address.
///
/// Ordering is byte-wise lexicographic and only serves to put pairs in
/// canonical order; it carries no economic meaning.
///
/// # Examples
///
/// ```
/// use hydra_router::domain::AssetId;
///
/// let lo = AssetId::from_bytes([1u8; 20]);
/// let hi = AssetId::from_bytes([2u8; 20]);
/// assert!(lo < hi);
/// assert!(AssetId::ZERO.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(Address);

impl AssetId {
    /// The all-zero sentinel. Never a valid asset.
    pub const ZERO: Self = Self(Address::ZERO);

    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Wraps an existing ledger address.
    #[must_use]
    pub const fn from_address(address: Address) -> Self {
        Self(address)
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the raw byte slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Address::ZERO
    }
}

impl From<Address> for AssetId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
