//! # Hydra Router
//!
//! Pricing and routing math for constant-product (Uniswap V2 style) pools.
//!
//! Given two assets the crate derives the pool that trades them, reads the
//! pool's reserves in the caller's order, quotes proportional amounts and
//! computes exact-input / exact-output swaps, single-hop or chained along a
//! path. All arithmetic is 256-bit unsigned and overflow-checked; all
//! rounding favours the pool.
//!
//! The crate performs no I/O. Pool discovery parameters, fees and balances
//! come from caller-supplied implementations of
//! [`PoolRegistry`](traits::PoolRegistry) and
//! [`ReserveSource`](traits::ReserveSource).
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::{Address, B256};
//! use hydra_router::config::{PoolConfig, RegistryConfig};
//! use hydra_router::domain::{Amount, AssetId, FeeRate, PoolFee};
//! use hydra_router::pricing::{get_amounts_in, get_amounts_out};
//! use hydra_router::registry::InMemoryRegistry;
//!
//! let usdc = AssetId::from_bytes([1u8; 20]);
//! let weth = AssetId::from_bytes([2u8; 20]);
//! let dai = AssetId::from_bytes([3u8; 20]);
//! let fee = PoolFee::FeeInToken(FeeRate::new(3).expect("0.3%"));
//!
//! // 1. Describe the registry and its pools
//! let config = RegistryConfig::new(
//!     Address::repeat_byte(0xfa),
//!     B256::repeat_byte(0x11),
//!     vec![
//!         PoolConfig::new(usdc, weth, Amount::new(3_000_000), Amount::new(1_000), fee),
//!         PoolConfig::new(weth, dai, Amount::new(1_000), Amount::new(3_000_000), fee),
//!     ],
//! )
//! .expect("valid config");
//! let registry = InMemoryRegistry::from_config(&config).expect("registry built");
//!
//! // 2. Sell 10 000 USDC through WETH into DAI
//! let amounts = get_amounts_out(&registry, Amount::new(10_000), &[usdc, weth, dai])
//!     .expect("routable");
//! assert_eq!(amounts.len(), 3);
//! assert!(amounts[2] < Amount::new(10_000));
//!
//! // 3. Price buying exactly that much DAI
//! let needed = get_amounts_in(&registry, amounts[2], &[usdc, weth, dai]).expect("routable");
//! assert!(needed[0] <= Amount::new(10_001));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`PoolFee`](domain::PoolFee), etc. |
//! | [`traits`] | Collaborator seams: [`PoolRegistry`](traits::PoolRegistry), [`ReserveSource`](traits::ReserveSource) |
//! | [`pricing`] | Pool derivation, reserve lookup, quoting, swap math, routing |
//! | [`config`] | Declarative registry blueprints: [`RegistryConfig`](config::RegistryConfig), [`PoolConfig`](config::PoolConfig) |
//! | [`registry`] | [`InMemoryRegistry`](registry::InMemoryRegistry) built from a blueprint |
//! | [`math`]   | Checked arithmetic on [`Amount`](domain::Amount) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod registry;
pub mod traits;
