//! Integer factorial and remainder evaluation
//!
//! This crate provides:
//! - `factorial` and `func`, reproducing native `int` semantics
//!   (negative input yields 0, overflow wraps)
//! - Width-generic kernels with an explicit overflow policy
//! - Unary/binary operators and an evaluator over `proven_value::Value`

mod config;
mod error;
mod evaluator;
mod factorial;
pub mod operators;

pub use config::ArithConfig;
pub use error::{Error, Result};
pub use evaluator::Evaluator;
pub use factorial::{
    FactorialInt, OverflowPolicy, factorial, factorial_remainder, factorial_with, func, remainder,
};
