//! Value types for Proven arithmetic
//!
//! Signed-integer value representation shared by the evaluation crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed integer widths a value can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl DataType {
    /// Largest n whose factorial is representable in this type
    pub fn max_exact_factorial(&self) -> u32 {
        match self {
            DataType::I8 => 5,
            DataType::I16 => 7,
            DataType::I32 => 12,
            DataType::I64 => 20,
            DataType::I128 => 33,
        }
    }

    /// Smallest representable value, widened
    pub fn min_value(&self) -> i128 {
        match self {
            DataType::I8 => i8::MIN as i128,
            DataType::I16 => i16::MIN as i128,
            DataType::I32 => i32::MIN as i128,
            DataType::I64 => i64::MIN as i128,
            DataType::I128 => i128::MIN,
        }
    }

    /// Largest representable value, widened
    pub fn max_value(&self) -> i128 {
        match self {
            DataType::I8 => i8::MAX as i128,
            DataType::I16 => i16::MAX as i128,
            DataType::I32 => i32::MAX as i128,
            DataType::I64 => i64::MAX as i128,
            DataType::I128 => i128::MAX,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::I8 => write!(f, "TINYINT"),
            DataType::I16 => write!(f, "SMALLINT"),
            DataType::I32 => write!(f, "INT"),
            DataType::I64 => write!(f, "BIGINT"),
            DataType::I128 => write!(f, "HUGEINT"),
        }
    }
}

/// Universal value type for Proven arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    // Null
    Null,

    // Signed integers
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a value of the given type from a widened integer.
    ///
    /// Returns `None` when `n` does not fit the target width.
    pub fn from_i128(data_type: DataType, n: i128) -> Option<Self> {
        match data_type {
            DataType::I8 => i8::try_from(n).ok().map(Value::I8),
            DataType::I16 => i16::try_from(n).ok().map(Value::I16),
            DataType::I32 => i32::try_from(n).ok().map(Value::I32),
            DataType::I64 => i64::try_from(n).ok().map(Value::I64),
            DataType::I128 => Some(Value::I128(n)),
        }
    }

    // ========================================================================
    // Type Checks
    // ========================================================================

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the data type of this value, `None` for NULL
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::I8(_) => Some(DataType::I8),
            Value::I16(_) => Some(DataType::I16),
            Value::I32(_) => Some(DataType::I32),
            Value::I64(_) => Some(DataType::I64),
            Value::I128(_) => Some(DataType::I128),
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Widen to i128, `None` for NULL
    pub fn to_i128(&self) -> Option<i128> {
        match self {
            Value::Null => None,
            Value::I8(i) => Some(*i as i128),
            Value::I16(i) => Some(*i as i128),
            Value::I32(i) => Some(*i as i128),
            Value::I64(i) => Some(*i as i128),
            Value::I128(i) => Some(*i),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::I8(i) => write!(f, "{}", i),
            Value::I16(i) => write!(f, "{}", i),
            Value::I32(i) => write!(f, "{}", i),
            Value::I64(i) => write!(f, "{}", i),
            Value::I128(i) => write!(f, "{}", i),
        }
    }
}
