//! Proven Value - signed integer value type for Proven arithmetic
//!
//! This crate provides the `Value` and `DataType` types shared by the
//! evaluation crates:
//! - Signed integers from 8 to 128 bits
//! - NULL, which operators propagate unchanged

pub mod types;

pub use types::{DataType, Value};
