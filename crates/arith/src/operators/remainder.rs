//! Remainder (modulo) operator implementation

use super::helpers::{same_width, value_type, width_mismatch};
use super::traits::BinaryOperator;
use crate::error::Result;
use crate::factorial::remainder;
use proven_value::{DataType, Value};

pub struct RemainderOperator;

impl BinaryOperator for RemainderOperator {
    fn name(&self) -> &'static str {
        "remainder"
    }

    fn symbol(&self) -> &'static str {
        "%"
    }

    fn validate(&self, left: &DataType, right: &DataType) -> Result<DataType> {
        same_width(left, right)
    }

    fn execute(&self, left: &Value, right: &Value) -> Result<Value> {
        use Value::*;

        match (left, right) {
            // NULL handling
            (Null, _) | (_, Null) => Ok(Null),

            (I8(a), I8(b)) => remainder(*a, *b).map(I8),
            (I16(a), I16(b)) => remainder(*a, *b).map(I16),
            (I32(a), I32(b)) => remainder(*a, *b).map(I32),
            (I64(a), I64(b)) => remainder(*a, *b).map(I64),
            (I128(a), I128(b)) => remainder(*a, *b).map(I128),

            // Both sides are non-NULL with differing widths
            _ => Err(width_mismatch(&value_type(left)?, &value_type(right)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_remainder_integers() {
        let op = RemainderOperator;

        // Type validation
        assert_eq!(
            op.validate(&DataType::I32, &DataType::I32).unwrap(),
            DataType::I32
        );
        assert!(op.validate(&DataType::I32, &DataType::I64).is_err());
        assert_eq!(op.name(), "remainder");
        assert_eq!(op.symbol(), "%");

        // Execution
        assert_eq!(
            op.execute(&Value::I32(6), &Value::I32(4)).unwrap(),
            Value::I32(2)
        );
        assert_eq!(
            op.execute(&Value::I32(-10), &Value::I32(3)).unwrap(),
            Value::I32(-1)
        );
        assert_eq!(
            op.execute(&Value::I64(120), &Value::I64(7)).unwrap(),
            Value::I64(1)
        );

        // Modulo by zero
        assert_eq!(
            op.execute(&Value::I32(10), &Value::I32(0)),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_remainder_null() {
        let op = RemainderOperator;

        assert_eq!(op.execute(&Value::Null, &Value::I32(4)).unwrap(), Value::Null);
        assert_eq!(op.execute(&Value::I32(4), &Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_remainder_mixed_widths_match_validation() {
        let op = RemainderOperator;

        let expected = Error::TypeMismatch {
            expected: "matching integer widths, INT".into(),
            found: "INT and BIGINT".into(),
        };
        assert_eq!(
            op.validate(&DataType::I32, &DataType::I64),
            Err(expected.clone())
        );
        assert_eq!(op.execute(&Value::I32(6), &Value::I64(4)), Err(expected));

        // Pair order is kept in the message
        assert_eq!(
            op.execute(&Value::I128(6), &Value::I8(4)),
            Err(Error::TypeMismatch {
                expected: "matching integer widths, HUGEINT".into(),
                found: "HUGEINT and TINYINT".into(),
            })
        );
    }
}
