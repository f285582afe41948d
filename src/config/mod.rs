//! Declarative registry configuration.
//!
//! A [`RegistryConfig`] names the registry identity and lists its pools as
//! [`PoolConfig`] entries. It is the blueprint from which
//! [`InMemoryRegistry`](crate::registry::InMemoryRegistry) is built, and
//! it deserializes with `serde` so fixtures can live in JSON or TOML.

mod pool_config;
mod registry_config;

pub use pool_config::PoolConfig;
pub use registry_config::RegistryConfig;
