//! Registry implementations.
//!
//! [`InMemoryRegistry`] answers both [`PoolRegistry`](crate::traits::PoolRegistry)
//! and [`ReserveSource`](crate::traits::ReserveSource) from fixed state. It is
//! the fixture used throughout the tests and a convenient backend for
//! off-ledger simulations fed from a snapshot.

mod in_memory;

pub use in_memory::InMemoryRegistry;
