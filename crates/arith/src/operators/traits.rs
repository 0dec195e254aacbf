//! Operator traits over integer values

use crate::error::Result;
use proven_value::{DataType, Value};

/// An operator applied to a single integer operand
pub trait UnaryOperator: Send + Sync {
    /// Name used in error messages and logs
    fn name(&self) -> &'static str;

    /// Postfix or prefix symbol for display
    fn symbol(&self) -> &'static str;

    /// Check the operand type and return the result type
    fn validate(&self, operand: &DataType) -> Result<DataType>;

    /// Apply the operator; NULL operands yield NULL
    fn execute(&self, operand: &Value) -> Result<Value>;
}

/// An operator applied to two integer operands
pub trait BinaryOperator: Send + Sync {
    /// Name used in error messages and logs
    fn name(&self) -> &'static str;

    /// Infix symbol for display
    fn symbol(&self) -> &'static str;

    /// Check the operand types and return the result type
    fn validate(&self, left: &DataType, right: &DataType) -> Result<DataType>;

    /// Apply the operator; a NULL on either side yields NULL
    fn execute(&self, left: &Value, right: &Value) -> Result<Value>;
}
