//! Integer operator implementations
//!
//! Each operator pairs type validation with execution so the two stay
//! consistent.

pub mod helpers;
pub mod traits;

mod factorial;
mod remainder;

pub use factorial::FactorialOperator;
pub use remainder::RemainderOperator;
pub use traits::{BinaryOperator, UnaryOperator};

use crate::error::Result;
use crate::factorial::OverflowPolicy;
use proven_value::{DataType, Value};

/// Execute factorial operation
pub fn execute_factorial(operand: &Value, policy: OverflowPolicy) -> Result<Value> {
    FactorialOperator::new(policy).execute(operand)
}

/// Validate factorial operation type
pub fn validate_factorial(operand: &DataType) -> Result<DataType> {
    static OP: FactorialOperator = FactorialOperator::new(OverflowPolicy::Wrapping);
    OP.validate(operand)
}

/// Execute remainder operation
pub fn execute_remainder(left: &Value, right: &Value) -> Result<Value> {
    static OP: RemainderOperator = RemainderOperator;
    OP.execute(left, right)
}

/// Validate remainder operation types
pub fn validate_remainder(left: &DataType, right: &DataType) -> Result<DataType> {
    static OP: RemainderOperator = RemainderOperator;
    OP.validate(left, right)
}
