//! Factorial operator implementation

use super::traits::UnaryOperator;
use crate::error::Result;
use crate::factorial::{OverflowPolicy, factorial_with};
use proven_value::{DataType, Value};

pub struct FactorialOperator {
    pub policy: OverflowPolicy,
}

impl FactorialOperator {
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }
}

impl Default for FactorialOperator {
    fn default() -> Self {
        Self::new(OverflowPolicy::Wrapping)
    }
}

impl UnaryOperator for FactorialOperator {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn symbol(&self) -> &'static str {
        "!"
    }

    fn validate(&self, operand: &DataType) -> Result<DataType> {
        // Result keeps the operand's width; overflow is the policy's concern
        Ok(*operand)
    }

    fn execute(&self, operand: &Value) -> Result<Value> {
        use Value::*;

        let policy = self.policy;
        match operand {
            Null => Ok(Null),
            I8(n) => factorial_with(*n, policy).map(I8),
            I16(n) => factorial_with(*n, policy).map(I16),
            I32(n) => factorial_with(*n, policy).map(I32),
            I64(n) => factorial_with(*n, policy).map(I64),
            I128(n) => factorial_with(*n, policy).map(I128),
        }
    }
}
