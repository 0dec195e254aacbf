//! Factorial kernels
//!
//! `factorial` and `func` reproduce the native `int` behavior: negative input
//! yields 0 and overflow wraps. `factorial_with` applies an explicit
//! [`OverflowPolicy`] at any signed width.

use crate::error::{Error, Result};
use proven_value::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior when a product leaves the integer range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound
    #[default]
    Wrapping,
    /// Clamp to the type's maximum
    Saturating,
    /// Fail with `Error::Overflow`
    Checked,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Wrapping => write!(f, "wrapping"),
            OverflowPolicy::Saturating => write!(f, "saturating"),
            OverflowPolicy::Checked => write!(f, "checked"),
        }
    }
}

/// Signed integer types a factorial can be computed in
pub trait FactorialInt: Copy + Ord + fmt::Display + fmt::Debug + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    const DATA_TYPE: DataType;
    /// Largest n with an exact n!
    const MAX_EXACT: Self;

    fn widen(self) -> i128;

    /// Narrow a widened value already known to fit
    fn narrow(n: i128) -> Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn saturating_mul(self, rhs: Self) -> Self;
    fn checked_rem(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_factorial_int {
    ($($t:ty => $dt:ident, $max_exact:expr);* $(;)?) => {
        $(
            impl FactorialInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
                const DATA_TYPE: DataType = DataType::$dt;
                const MAX_EXACT: Self = $max_exact;

                fn widen(self) -> i128 {
                    self as i128
                }

                fn narrow(n: i128) -> Self {
                    n as $t
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                fn saturating_mul(self, rhs: Self) -> Self {
                    <$t>::saturating_mul(self, rhs)
                }

                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }
            }
        )*
    };
}

impl_factorial_int! {
    i8 => I8, 5;
    i16 => I16, 7;
    i32 => I32, 12;
    i64 => I64, 20;
    i128 => I128, 33;
}

/// n! as a C `int` would compute it.
///
/// Negative `n` returns 0. Results past 12! wrap.
pub fn factorial(n: i32) -> i32 {
    if n < 0 {
        return 0;
    }

    let mut result = 1i32;
    for i in 2..=n {
        result = result.wrapping_mul(i);
        // Once 2^32 divides the product it stays zero
        if result == 0 {
            break;
        }
    }
    result
}

/// `factorial(3) % 4`
pub fn func() -> i32 {
    let x = factorial(3);
    x % 4
}

/// n! at the width of `T` under the given overflow policy.
///
/// Negative `n` returns `Ok(0)` under every policy. Only
/// `OverflowPolicy::Checked` can fail.
pub fn factorial_with<T: FactorialInt>(n: T, policy: OverflowPolicy) -> Result<T> {
    if n < T::ZERO {
        return Ok(T::ZERO);
    }

    let mut result = T::ONE;
    for i in 2..=n.widen() {
        let i = T::narrow(i);
        result = match policy {
            OverflowPolicy::Wrapping => result.wrapping_mul(i),
            OverflowPolicy::Saturating => result.saturating_mul(i),
            OverflowPolicy::Checked => result.checked_mul(i).ok_or_else(|| {
                tracing::debug!("{}! overflows {} at factor {}", n, T::DATA_TYPE, i);
                Error::overflow("factorial", n)
            })?,
        };

        // Zero (wrapped) and MAX (saturated) are fixed points of the loop
        if result == T::ZERO {
            break;
        }
        if policy == OverflowPolicy::Saturating && result == T::MAX {
            tracing::debug!("{}! saturated {} at factor {}", n, T::DATA_TYPE, i);
            break;
        }
    }
    Ok(result)
}

/// `dividend % modulus` with the sign of the dividend
pub fn remainder<T: FactorialInt>(dividend: T, modulus: T) -> Result<T> {
    if modulus == T::ZERO {
        return Err(Error::DivisionByZero);
    }
    dividend
        .checked_rem(modulus)
        .ok_or_else(|| Error::overflow("remainder", format!("{} % {}", dividend, modulus)))
}

/// `n! % modulus` under the given overflow policy
pub fn factorial_remainder<T: FactorialInt>(
    n: T,
    modulus: T,
    policy: OverflowPolicy,
) -> Result<T> {
    if modulus == T::ZERO {
        return Err(Error::DivisionByZero);
    }
    let product = factorial_with(n, policy)?;
    remainder(product, modulus)
}
