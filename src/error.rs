//! Unified error types for the routing library.
//!
//! Every fallible operation in the crate returns [`AmmError`], so callers
//! can match on a single enum whether a failure came from canonicalization,
//! swap math, path walking or the injected registry.

use crate::domain::PoolHandle;

/// All failure kinds produced by the pricing and routing engine.
///
/// Every variant is tied to specific caller-supplied or externally-read
/// values; none is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// The two assets supplied to canonicalization are equal.
    #[error("identical assets")]
    IdenticalAssets,

    /// Canonicalization yielded the zero asset as the lower-ordered member.
    #[error("zero asset")]
    ZeroAsset,

    /// A proportional quote was requested for a zero amount.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// A forward swap was requested for a zero input amount.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// An inverse swap was requested for a zero output amount.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A reserve is zero, or the requested output is not strictly below
    /// the available reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A path with fewer than two assets was supplied to the router.
    #[error("invalid path")]
    InvalidPath,

    /// An intermediate value exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A division had a zero divisor.
    ///
    /// Only [`CheckedArithmetic::safe_div`](crate::math::CheckedArithmetic::safe_div)
    /// reports this; the pricing functions check their divisors first and
    /// never return it.
    #[error("division by zero")]
    DivisionByZero,

    /// A fee rate is outside `0..=1000` or makes the swap impossible.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A declarative registry configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The reserve source holds no pool under the derived handle.
    #[error("pool {0} not found")]
    PoolNotFound(PoolHandle),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
