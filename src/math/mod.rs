//! Overflow-checked arithmetic used by the swap formulas.

mod checked;

pub use checked::CheckedArithmetic;
