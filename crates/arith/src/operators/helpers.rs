//! Helper functions for operator implementations

use crate::error::{Error, Result};
use proven_value::{DataType, Value};

/// Require two operand types to share a width
pub fn same_width(left: &DataType, right: &DataType) -> Result<DataType> {
    if left == right {
        Ok(*left)
    } else {
        Err(width_mismatch(left, right))
    }
}

/// Error for an operand pair of differing widths
pub fn width_mismatch(left: &DataType, right: &DataType) -> Error {
    Error::TypeMismatch {
        expected: format!("matching integer widths, {}", left),
        found: format!("{} and {}", left, right),
    }
}

/// Type of a non-NULL value
pub fn value_type(value: &Value) -> Result<DataType> {
    value
        .data_type()
        .ok_or_else(|| Error::InvalidValue("NULL has no integer type".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_width() {
        assert_eq!(same_width(&DataType::I64, &DataType::I64).unwrap(), DataType::I64);
        assert_eq!(
            same_width(&DataType::I32, &DataType::I64),
            Err(Error::TypeMismatch {
                expected: "matching integer widths, INT".into(),
                found: "INT and BIGINT".into(),
            })
        );
    }

    #[test]
    fn test_value_type() {
        assert_eq!(value_type(&Value::I8(1)).unwrap(), DataType::I8);
        assert!(value_type(&Value::Null).is_err());
    }
}
