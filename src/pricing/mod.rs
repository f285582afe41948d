//! Constant-product pricing and routing.
//!
//! Every function here is pure with respect to its inputs: the only state
//! consulted is what the injected [`PoolRegistry`](crate::traits::PoolRegistry)
//! and [`ReserveSource`](crate::traits::ReserveSource) return.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`canonicalize`] / [`derive_pool`] | Order a pair and compute its pool handle |
//! | [`get_reserves`] | Pool balances in caller-requested order |
//! | [`quote`] | Fee-free proportional conversion |
//! | [`get_amount_out`] / [`get_amount_in`] | Single-pool swap math with the pool's fee |
//! | [`get_amounts_out`] / [`get_amounts_in`] | Multi-hop propagation along a path |

mod pool_address;
mod quote;
mod reserves;
mod router;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool_address::{canonicalize, derive_pool, pool_address};
pub use quote::quote;
pub use reserves::get_reserves;
pub use router::{get_amounts, get_amounts_in, get_amounts_out};
pub use swap::{amount_in_for, amount_out_for, get_amount_in, get_amount_out, lookup_fee};
