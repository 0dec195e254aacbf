//! Policy-aware evaluation over `Value`s

use crate::config::ArithConfig;
use crate::error::{Error, Result};
use crate::operators::helpers::value_type;
use crate::operators::{
    BinaryOperator, FactorialOperator, RemainderOperator, UnaryOperator, validate_factorial,
    validate_remainder,
};
use proven_value::Value;

/// Evaluates factorial expressions under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: ArithConfig,
}

impl Evaluator {
    pub fn new(config: ArithConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    /// `operand!`
    pub fn factorial(&self, operand: &Value) -> Result<Value> {
        let op = FactorialOperator::new(self.config.overflow);
        let result = op.execute(operand);
        tracing::trace!(
            "{} {}{} under {} overflow -> {:?}",
            op.name(),
            operand,
            op.symbol(),
            self.config.overflow,
            result
        );
        result
    }

    /// `operand! % modulus`
    pub fn factorial_remainder(&self, operand: &Value, modulus: &Value) -> Result<Value> {
        if operand.is_null() || modulus.is_null() {
            return Ok(Value::Null);
        }

        let product_type = validate_factorial(&value_type(operand)?)?;
        validate_remainder(&product_type, &value_type(modulus)?)?;

        let product = self.factorial(operand)?;
        let op = RemainderOperator;
        let result = op.execute(&product, modulus);
        tracing::trace!(
            "{} {} {} {} -> {:?}",
            op.name(),
            product,
            op.symbol(),
            modulus,
            result
        );
        result
    }

    /// `3! % 4` at the configured width
    pub fn caller(&self) -> Result<Value> {
        let three = self.literal(3)?;
        let four = self.literal(4)?;
        self.factorial_remainder(&three, &four)
    }

    /// Integer literal at the configured width
    fn literal(&self, n: i128) -> Result<Value> {
        let width = self.config.width;
        Value::from_i128(width, n)
            .ok_or_else(|| Error::InvalidValue(format!("{} does not fit in {}", n, width)))
    }
}
