//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_router::prelude::*;
//! ```

pub use crate::domain::{
    Amount, AssetId, AssetPair, FeeRate, Path, PoolFee, PoolHandle, Reserves, SwapSpec,
};

pub use crate::traits::{PoolRegistry, ReserveSource};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PoolConfig, RegistryConfig};

pub use crate::error::{AmmError, Result};

pub use crate::pricing::{
    derive_pool, get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, get_reserves,
    quote,
};

pub use crate::registry::InMemoryRegistry;
