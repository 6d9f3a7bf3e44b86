//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives `Result`-returning operations on the domain
//! newtypes, [`mul_div`] covers the `a * b / c` shape shared by every
//! proportional formula, and [`isqrt`] prices the bootstrap deposit.

mod checked;
mod sqrt;

pub use checked::{mul_div, CheckedArithmetic};
pub use sqrt::isqrt;
