//! Integer arithmetic.
//!
//! Four pure functions over two `i64` operands. Only division can fail.
//! Add, subtract and multiply use two's-complement wrapping on overflow,
//! the native behaviour of the machine integer, and never panic.

use thiserror::Error;

/// Errors produced by the arithmetic functions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Returns the sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Returns the difference of two integers.
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Returns the product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Returns the quotient of two integers as an `f64`.
///
/// Both operands are widened to `f64` before dividing, so non-exact
/// quotients are preserved. A zero divisor is rejected up front instead of
/// producing infinity or NaN.
pub fn divide(a: i64, b: i64) -> Result<f64, ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}
