//! Value types of the pricing domain.
//!
//! Assets, pairs, pool handles, amounts, fees, reserves and routes. Every
//! type with an invariant has a validating constructor, so a value that
//! exists is a value that is valid.

mod amount;
mod asset_id;
mod asset_pair;
mod fee_rate;
mod path;
mod pool_handle;
mod reserves;
mod swap_spec;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use fee_rate::{FEE_DENOMINATOR, FeeRate, PoolFee};
pub use path::Path;
pub use pool_handle::PoolHandle;
pub use reserves::Reserves;
pub use swap_spec::SwapSpec;
