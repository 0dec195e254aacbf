//! Common test utilities for arithmetic integration tests
#![allow(dead_code)]

use proven_arith::{ArithConfig, Evaluator, OverflowPolicy};
use proven_value::{DataType, Value};

/// Every supported signed width
pub const ALL_WIDTHS: [DataType; 5] = [
    DataType::I8,
    DataType::I16,
    DataType::I32,
    DataType::I64,
    DataType::I128,
];

/// Every overflow policy
pub const ALL_POLICIES: [OverflowPolicy; 3] = [
    OverflowPolicy::Wrapping,
    OverflowPolicy::Saturating,
    OverflowPolicy::Checked,
];

/// Build an evaluator for the given policy
pub fn evaluator(policy: OverflowPolicy) -> Evaluator {
    Evaluator::new(ArithConfig::new(policy))
}

/// Build a value of the given width, panicking if it does not fit
pub fn value(width: DataType, n: i128) -> Value {
    Value::from_i128(width, n)
        .unwrap_or_else(|| panic!("{} does not fit in {}", n, width))
}

/// Exact n! for small n, computed wide
pub fn exact_factorial(n: u32) -> i128 {
    (2..=n as i128).product()
}
