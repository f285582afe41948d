//! Injected collaborator traits.
//!
//! [`PoolRegistry`] supplies the derivation inputs and per-pool fees,
//! [`ReserveSource`] supplies pool balances.

mod pool_registry;

pub use pool_registry::{PoolRegistry, ReserveSource};
